//! Vello painter for native hosts.
//!
//! Builds a `vello::Scene` from the canvas; presenting it on a GPU surface is
//! left to the host. The browser bridge in `dp-wasm` does not use this crate:
//! it draws through Canvas2D or SVG. No other workspace crate depends on it.

pub mod paint;
pub mod surface;

pub use paint::paint_canvas;
pub use surface::SurfaceConfig;
