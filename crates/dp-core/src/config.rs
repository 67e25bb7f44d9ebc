//! Tool configuration: the fixed palette and stroke widths.

use crate::model::Color;

/// Selectable stroke colors, in toolbar order.
pub const PALETTE: [Color; 6] = [
    Color::rgb8(0x11, 0x18, 0x27), // near-black
    Color::rgb8(0xF9, 0x73, 0x16), // orange
    Color::rgb8(0x22, 0xC5, 0x5E), // green
    Color::rgb8(0x0E, 0xA5, 0xE9), // blue
    Color::rgb8(0xE1, 0x1D, 0x48), // pink/red
    Color::rgb8(0xFA, 0xCC, 0x15), // yellow
];

/// Selectable stroke widths, in toolbar order.
pub const WIDTHS: [f32; 4] = [2.0, 4.0, 8.0, 12.0];

/// Background of the drawing surface.
pub const SURFACE_BACKGROUND: Color = Color::WHITE;

/// The color and width applied to the next stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    pub color: Color,
    pub width: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: PALETTE[0],
            width: WIDTHS[1],
        }
    }
}

/// A usable stroke width is finite and strictly positive.
pub fn is_valid_width(width: f32) -> bool {
    width.is_finite() && width > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_toolbar() {
        let settings = ToolSettings::default();
        assert_eq!(settings.color.to_hex(), "#111827");
        assert_eq!(settings.width, 4.0);
    }

    #[test]
    fn palette_hex_values() {
        let hex: Vec<String> = PALETTE.iter().map(Color::to_hex).collect();
        assert_eq!(
            hex,
            ["#111827", "#F97316", "#22C55E", "#0EA5E9", "#E11D48", "#FACC15"]
        );
    }

    #[test]
    fn width_validation() {
        assert!(WIDTHS.iter().all(|w| is_valid_width(*w)));
        assert!(!is_valid_width(0.0));
        assert!(!is_valid_width(-2.0));
        assert!(!is_valid_width(f32::NAN));
        assert!(!is_valid_width(f32::INFINITY));
    }
}
