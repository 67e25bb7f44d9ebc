//! Input abstraction layer.
//!
//! Normalizes mouse and touch events into a unified `InputEvent` enum
//! consumed by the pen tool. Coordinates are canvas-local.

/// A normalized input event from a single pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved while the canvas holds the pointer.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// The platform took the pointer away mid-gesture.
    PointerCancel,
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    /// Extract position if the event carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Some((*x, *y))
            }
            Self::PointerCancel => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_of_pointer_events() {
        assert_eq!(InputEvent::from_pointer_down(1.0, 2.0).position(), Some((1.0, 2.0)));
        assert_eq!(InputEvent::from_pointer_move(3.0, 4.0).position(), Some((3.0, 4.0)));
        assert_eq!(InputEvent::from_pointer_up(5.0, 6.0).position(), Some((5.0, 6.0)));
        assert_eq!(InputEvent::PointerCancel.position(), None);
    }
}
