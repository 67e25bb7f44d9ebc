//! Pen tool: turns pointer events into canvas mutations.
//!
//! | Event           | Mutation           |
//! |-----------------|--------------------|
//! | `PointerDown`   | `BeginStroke`      |
//! | `PointerMove`   | `ExtendStroke` while the pen is down |
//! | `PointerUp`     | `CommitStroke`     |
//! | `PointerCancel` | `CancelStroke`     |
//!
//! The release coordinate is not recorded: the last point of a stroke is the
//! last move sample.

use crate::input::InputEvent;
use crate::session::CanvasMutation;
use dp_core::{CanvasState, Point};

/// Freehand pen. Tracks whether the pointer is down so stray moves (hover,
/// or moves after an undo/clear ended the gesture) are dropped.
#[derive(Debug, Default)]
pub struct PenTool {
    drawing: bool,
}

impl PenTool {
    pub fn new() -> Self {
        Self { drawing: false }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Match the pen to the canvas after a mutation applied from outside the
    /// pen (a direct begin, an undo or clear mid-gesture).
    pub fn follow(&mut self, canvas: &CanvasState) {
        self.drawing = canvas.is_drawing();
    }

    /// Handle an input event, returning the mutation it implies, if any.
    pub fn handle(&mut self, event: &InputEvent) -> Option<CanvasMutation> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.drawing = true;
                Some(CanvasMutation::BeginStroke(Point::new(x, y)))
            }
            InputEvent::PointerMove { x, y } => self
                .drawing
                .then(|| CanvasMutation::ExtendStroke(Point::new(x, y))),
            InputEvent::PointerUp { .. } => {
                self.drawing = false;
                Some(CanvasMutation::CommitStroke)
            }
            InputEvent::PointerCancel => {
                self.drawing = false;
                Some(CanvasMutation::CancelStroke)
            }
        }
    }
}
