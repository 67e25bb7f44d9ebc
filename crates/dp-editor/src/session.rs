//! Drawing session: the single owner of canvas state for one screen.
//!
//! Input events and toolbar presses are turned into `CanvasMutation`s and
//! applied here, one at a time, in delivery order. After every mutation
//! that changes the canvas, registered observers are notified so the
//! presentation layer can re-render. `CanvasState` itself knows nothing
//! about observers.

use crate::input::InputEvent;
use crate::toolbar::{ActionAvailability, Toolbar, ToolbarAction};
use crate::tools::PenTool;
use dp_core::config::is_valid_width;
use dp_core::{CanvasState, Color, Point, ToolSettings};

/// A single change to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasMutation {
    BeginStroke(Point),
    ExtendStroke(Point),
    CommitStroke,
    CancelStroke,
    SetColor(Color),
    SetWidth(f32),
    Undo,
    Clear,
}

/// Receives the canvas after each effective mutation.
pub trait CanvasObserver {
    fn canvas_changed(&mut self, canvas: &CanvasState);
}

impl<F: FnMut(&CanvasState)> CanvasObserver for F {
    fn canvas_changed(&mut self, canvas: &CanvasState) {
        self(canvas)
    }
}

pub struct DrawingSession {
    canvas: CanvasState,
    pen: PenTool,
    observers: Vec<Box<dyn CanvasObserver>>,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::with_settings(ToolSettings::default())
    }

    pub fn with_settings(settings: ToolSettings) -> Self {
        Self {
            canvas: CanvasState::with_settings(settings),
            pen: PenTool::new(),
            observers: Vec::new(),
        }
    }

    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    pub fn pen(&self) -> &PenTool {
        &self.pen
    }

    /// Register an observer; it is called after every effective mutation.
    pub fn subscribe(&mut self, observer: impl CanvasObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn availability(&self) -> ActionAvailability {
        ActionAvailability::of(&self.canvas)
    }

    // ─── Event entry points ──────────────────────────────────────────────

    /// Route a pointer event through the pen. Returns true if the canvas changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self.pen.handle(event) {
            Some(mutation) => self.apply(mutation),
            None => false,
        }
    }

    /// Press a toolbar button. Disabled buttons do nothing.
    pub fn press(&mut self, action: ToolbarAction) -> bool {
        match Toolbar::press(action, &self.canvas) {
            Some(mutation) => self.apply(mutation),
            None => false,
        }
    }

    pub fn select_color(&mut self, index: usize) -> bool {
        Toolbar::select_color(index).is_some_and(|m| self.apply(m))
    }

    pub fn select_width(&mut self, index: usize) -> bool {
        Toolbar::select_width(index).is_some_and(|m| self.apply(m))
    }

    // ─── Mutation ────────────────────────────────────────────────────────

    /// Apply a mutation. Returns true if the canvas changed, in which case
    /// observers have been notified.
    pub fn apply(&mut self, mutation: CanvasMutation) -> bool {
        let changed = self.would_change(&mutation);

        match mutation {
            CanvasMutation::BeginStroke(point) => self.canvas.begin_stroke(point),
            CanvasMutation::ExtendStroke(point) => self.canvas.extend_stroke(point),
            CanvasMutation::CommitStroke => self.canvas.commit_stroke(),
            CanvasMutation::CancelStroke => self.canvas.cancel_stroke(),
            CanvasMutation::SetColor(color) => self.canvas.set_color(color),
            CanvasMutation::SetWidth(width) => self.canvas.set_width(width),
            CanvasMutation::Undo => self.canvas.undo(),
            CanvasMutation::Clear => self.canvas.clear(),
        }
        self.pen.follow(&self.canvas);

        if changed {
            self.notify();
        }
        changed
    }

    fn would_change(&self, mutation: &CanvasMutation) -> bool {
        let canvas = &self.canvas;
        match *mutation {
            CanvasMutation::BeginStroke(_) => true,
            CanvasMutation::ExtendStroke(_)
            | CanvasMutation::CommitStroke
            | CanvasMutation::CancelStroke => canvas.is_drawing(),
            CanvasMutation::SetColor(color) => color != canvas.active_color(),
            CanvasMutation::SetWidth(width) => {
                is_valid_width(width) && width != canvas.active_width()
            }
            CanvasMutation::Undo => {
                canvas.is_drawing() || !canvas.completed_strokes().is_empty()
            }
            CanvasMutation::Clear => crate::toolbar::has_strokes(canvas),
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.canvas_changed(&self.canvas);
        }
    }
}
