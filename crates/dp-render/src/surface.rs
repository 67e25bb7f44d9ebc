//! Drawing surface configuration.
//!
//! The host computes the surface size (responsive layout lives there);
//! the painter only needs the final pixel dimensions.

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl SurfaceConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Surface bounds as a kurbo rectangle at the origin.
    pub fn bounds(&self) -> kurbo::Rect {
        kurbo::Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }
}
