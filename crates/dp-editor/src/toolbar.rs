//! Toolbar: palette and width pickers plus the Undo / Clear buttons.
//!
//! Button enablement is derived from canvas state on every query and never
//! stored; a press on a disabled button produces no mutation.

use crate::session::CanvasMutation;
use dp_core::CanvasState;
use dp_core::config::{PALETTE, WIDTHS};

/// Toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Undo,
    Clear,
}

/// Which action buttons are enabled for a given canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionAvailability {
    /// At least one committed stroke exists.
    pub undo: bool,
    /// Any stroke exists, committed or in progress.
    pub clear: bool,
}

impl ActionAvailability {
    pub fn of(canvas: &CanvasState) -> Self {
        Self {
            undo: !canvas.completed_strokes().is_empty(),
            clear: has_strokes(canvas),
        }
    }

    pub fn allows(&self, action: ToolbarAction) -> bool {
        match action {
            ToolbarAction::Undo => self.undo,
            ToolbarAction::Clear => self.clear,
        }
    }
}

/// True when anything is on the canvas, including a stroke being drawn.
pub fn has_strokes(canvas: &CanvasState) -> bool {
    !canvas.completed_strokes().is_empty() || canvas.in_progress().is_some()
}

/// Maps toolbar selections to canvas mutations.
pub struct Toolbar;

impl Toolbar {
    /// Pick palette entry `index`. Out-of-range indices select nothing.
    pub fn select_color(index: usize) -> Option<CanvasMutation> {
        PALETTE.get(index).copied().map(CanvasMutation::SetColor)
    }

    /// Pick width entry `index`. Out-of-range indices select nothing.
    pub fn select_width(index: usize) -> Option<CanvasMutation> {
        WIDTHS.get(index).copied().map(CanvasMutation::SetWidth)
    }

    /// Press an action button; disabled buttons ignore the press.
    pub fn press(action: ToolbarAction, canvas: &CanvasState) -> Option<CanvasMutation> {
        if !ActionAvailability::of(canvas).allows(action) {
            log::trace!("{action:?} pressed while disabled");
            return None;
        }
        Some(match action {
            ToolbarAction::Undo => CanvasMutation::Undo,
            ToolbarAction::Clear => CanvasMutation::Clear,
        })
    }

    /// Palette index of the active color, for highlighting its swatch.
    pub fn active_color_index(canvas: &CanvasState) -> Option<usize> {
        let active = canvas.active_color();
        PALETTE.iter().position(|c| *c == active)
    }

    /// Width index of the active width, for highlighting its chip.
    pub fn active_width_index(canvas: &CanvasState) -> Option<usize> {
        let active = canvas.active_width();
        WIDTHS.iter().position(|w| *w == active)
    }
}
