//! Stroke capture state machine.
//!
//! `CanvasState` owns the committed strokes, the stroke currently being
//! drawn, the active tool settings and the id allocator. Every operation
//! is total: degenerate calls (extend with nothing in progress, undo on an
//! empty canvas) are no-ops, never errors.
//!
//! ```text
//!   Idle ──begin──▶ Drawing ──extend──▶ Drawing
//!    ▲                 │
//!    └──commit/cancel──┘      undo / clear: any state ──▶ Idle
//! ```

use crate::config::{ToolSettings, is_valid_width};
use crate::id::{IdAllocator, StrokeId};
use crate::model::{Color, Point, Stroke};

/// Whether a stroke is currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    Drawing,
}

/// The drawing canvas: completed strokes plus at most one in-progress stroke.
#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    completed: Vec<Stroke>,
    in_progress: Option<Stroke>,
    tool: ToolSettings,
    ids: IdAllocator,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(tool: ToolSettings) -> Self {
        Self {
            tool,
            ..Self::default()
        }
    }

    // ─── Capture ─────────────────────────────────────────────────────────

    /// Start a new stroke at `point` with the active color and width.
    ///
    /// A stale in-progress stroke (a lost pointer-up) is discarded, not
    /// committed.
    pub fn begin_stroke(&mut self, point: Point) {
        if let Some(stale) = self.in_progress.take() {
            log::debug!("discarding stale stroke {} ({} points)", stale.id, stale.len());
        }
        let id = self.ids.allocate();
        self.in_progress = Some(Stroke::new(id, self.tool.color, self.tool.width, point));
    }

    /// Append `point` to the in-progress stroke, if any.
    pub fn extend_stroke(&mut self, point: Point) {
        if let Some(stroke) = self.in_progress.as_mut() {
            stroke.push(point);
        }
    }

    /// Move the in-progress stroke into the completed list.
    pub fn commit_stroke(&mut self) {
        if let Some(stroke) = self.in_progress.take() {
            log::debug!("commit stroke {} ({} points)", stroke.id, stroke.len());
            self.completed.push(stroke);
        }
    }

    /// Drop the in-progress stroke without committing it.
    pub fn cancel_stroke(&mut self) {
        if let Some(stroke) = self.in_progress.take() {
            log::debug!("cancel stroke {} ({} points)", stroke.id, stroke.len());
        }
    }

    // ─── Tool settings ───────────────────────────────────────────────────

    /// Color for strokes started from now on.
    pub fn set_color(&mut self, color: Color) {
        self.tool.color = color;
    }

    /// Width for strokes started from now on. Non-finite or non-positive
    /// widths are ignored.
    pub fn set_width(&mut self, width: f32) {
        if is_valid_width(width) {
            self.tool.width = width;
        } else {
            log::warn!("ignoring invalid stroke width {width}");
        }
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Remove the last completed stroke and stop any active draw.
    ///
    /// Both happen: undo mid-gesture drops the gesture *and* the previous
    /// stroke.
    pub fn undo(&mut self) {
        self.cancel_stroke();
        if let Some(stroke) = self.completed.pop() {
            log::debug!("undo stroke {}", stroke.id);
        }
    }

    /// Remove every stroke, including the one being drawn.
    pub fn clear(&mut self) {
        self.cancel_stroke();
        if !self.completed.is_empty() {
            log::debug!("clear {} strokes", self.completed.len());
            self.completed.clear();
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Completed strokes in commit order, then the in-progress stroke.
    pub fn renderable_strokes(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.completed.iter().chain(self.in_progress.iter())
    }

    pub fn completed_strokes(&self) -> &[Stroke] {
        &self.completed
    }

    pub fn in_progress(&self) -> Option<&Stroke> {
        self.in_progress.as_ref()
    }

    pub fn tool(&self) -> ToolSettings {
        self.tool
    }

    pub fn active_color(&self) -> Color {
        self.tool.color
    }

    pub fn active_width(&self) -> f32 {
        self.tool.width
    }

    /// The id the next `begin_stroke` will assign.
    pub fn next_id(&self) -> StrokeId {
        self.ids.peek()
    }

    pub fn phase(&self) -> CapturePhase {
        if self.in_progress.is_some() {
            CapturePhase::Drawing
        } else {
            CapturePhase::Idle
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.phase() == CapturePhase::Drawing
    }
}
