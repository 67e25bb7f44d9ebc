//! WASM bridge for the drawing screen — exposes the Rust drawing session
//! to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host owns layout and
//! pointer capture; it forwards canvas-local pointer coordinates here and
//! re-renders whenever a handler returns `true`.
//!
//! Points are stored as `f32`. JavaScript numbers passed to the pointer
//! handlers are narrowed on the way in, so coordinates keep about seven
//! significant digits, and `strokes_json` reports the narrowed values.

mod render2d;
mod svg;

use dp_core::config::{PALETTE, WIDTHS};
use dp_core::{Color, Stroke};
use dp_editor::input::InputEvent;
use dp_editor::session::{CanvasMutation, DrawingSession};
use dp_editor::toolbar::{Toolbar, ToolbarAction, has_strokes};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// Holds the drawing session and the surface size. All interaction from
/// the host goes through this struct.
#[wasm_bindgen]
pub struct DrawingCanvas {
    session: DrawingSession,
    width: f64,
    height: f64,
}

/// Everything the host toolbar needs to paint itself.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolbarState {
    active_color: String,
    active_width: f32,
    active_color_index: Option<usize>,
    active_width_index: Option<usize>,
    can_undo: bool,
    can_clear: bool,
}

#[wasm_bindgen]
impl DrawingCanvas {
    /// Create a new canvas controller with the given surface size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();

        Self {
            session: DrawingSession::new(),
            width,
            height,
        }
    }

    /// Resize the surface. Strokes keep their canvas-local coordinates.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Render the canvas to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        render2d::render_strokes(
            ctx,
            self.session.canvas().renderable_strokes(),
            self.width,
            self.height,
        );
    }

    /// SVG markup for the current surface, for hosts drawing through an
    /// `<svg>` element instead of a `<canvas>`.
    pub fn render_svg(&self) -> String {
        svg::render_svg(
            self.session.canvas().renderable_strokes(),
            self.width,
            self.height,
        )
    }

    // ─── Pointer API ─────────────────────────────────────────────────────

    /// Pointer pressed on the canvas. Returns true if the canvas changed.
    ///
    /// `x` and `y` arrive as JS numbers and are narrowed to `f32`.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.session
            .handle_input(&InputEvent::from_pointer_down(x, y))
    }

    /// Pointer moved. Returns true if the canvas changed.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.session
            .handle_input(&InputEvent::from_pointer_move(x, y))
    }

    /// Pointer released. Returns true if the canvas changed.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.session.handle_input(&InputEvent::from_pointer_up(x, y))
    }

    /// Pointer capture lost (gesture terminated by the platform).
    pub fn handle_pointer_cancel(&mut self) -> bool {
        self.session.handle_input(&InputEvent::PointerCancel)
    }

    // ─── Toolbar API ─────────────────────────────────────────────────────

    /// Pick palette entry `index`. Returns false for an unknown index or
    /// when it is already active.
    pub fn select_color(&mut self, index: usize) -> bool {
        self.session.select_color(index)
    }

    /// Pick width entry `index`. Returns false for an unknown index or
    /// when it is already active.
    pub fn select_width(&mut self, index: usize) -> bool {
        self.session.select_width(index)
    }

    /// Set the active color from a hex string.
    /// Returns `false` if the string is not a hex color.
    pub fn set_color(&mut self, hex: &str) -> bool {
        match Color::from_hex(hex) {
            Some(color) => self.session.apply(CanvasMutation::SetColor(color)),
            None => {
                log::warn!("rejecting color {hex:?}");
                false
            }
        }
    }

    /// Set the active width. Non-positive widths are rejected.
    pub fn set_width(&mut self, width: f32) -> bool {
        self.session.apply(CanvasMutation::SetWidth(width))
    }

    /// Undo the last completed stroke, also dropping any stroke still being
    /// drawn. Follows the undo button: with no completed stroke the button is
    /// disabled, so this returns false and an active draw carries on.
    pub fn undo(&mut self) -> bool {
        self.session.press(ToolbarAction::Undo)
    }

    /// Remove every stroke.
    pub fn clear(&mut self) -> bool {
        self.session.press(ToolbarAction::Clear)
    }

    pub fn can_undo(&self) -> bool {
        self.session.availability().undo
    }

    pub fn can_clear(&self) -> bool {
        self.session.availability().clear
    }

    pub fn has_strokes(&self) -> bool {
        has_strokes(self.session.canvas())
    }

    pub fn is_drawing(&self) -> bool {
        self.session.canvas().is_drawing()
    }

    /// Active color as `#RRGGBB`.
    pub fn active_color(&self) -> String {
        self.session.canvas().active_color().to_hex()
    }

    pub fn active_width(&self) -> f32 {
        self.session.canvas().active_width()
    }

    // ─── JSON projections ────────────────────────────────────────────────

    /// Renderable strokes as a JSON array of
    /// `{"id":n,"color":"#RRGGBB","width":w,"points":[{"x":..,"y":..}]}`.
    pub fn strokes_json(&self) -> String {
        let strokes: Vec<&Stroke> = self.session.canvas().renderable_strokes().collect();
        serde_json::to_string(&strokes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Toolbar state as JSON: active tool plus button enablement.
    pub fn toolbar_json(&self) -> String {
        let canvas = self.session.canvas();
        let availability = self.session.availability();
        let state = ToolbarState {
            active_color: canvas.active_color().to_hex(),
            active_width: canvas.active_width(),
            active_color_index: Toolbar::active_color_index(canvas),
            active_width_index: Toolbar::active_width_index(canvas),
            can_undo: availability.undo,
            can_clear: availability.clear,
        };
        serde_json::to_string(&state).unwrap_or_else(|_| "{}".to_string())
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("drawing WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone configuration (no canvas needed) ─────────────────────────

/// The palette as a JSON array of hex strings, in toolbar order.
#[wasm_bindgen]
pub fn palette_json() -> String {
    serde_json::to_string(&PALETTE).unwrap_or_else(|_| "[]".to_string())
}

/// The selectable widths as a JSON array, in toolbar order.
#[wasm_bindgen]
pub fn widths_json() -> String {
    serde_json::to_string(&WIDTHS).unwrap_or_else(|_| "[]".to_string())
}
