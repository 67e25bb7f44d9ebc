pub mod canvas;
pub mod config;
pub mod id;
pub mod model;
pub mod path;

pub use canvas::{CanvasState, CapturePhase};
pub use config::{PALETTE, ToolSettings, WIDTHS};
pub use id::StrokeId;
pub use model::*;
pub use path::{PathCmd, PathDescription};
