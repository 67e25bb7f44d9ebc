//! Canvas2D software renderer.
//!
//! Draws the renderable strokes to an HTML `<canvas>` via
//! `CanvasRenderingContext2d`: white background, then one stroked polyline
//! per stroke in commit order, the live stroke last.

use dp_core::Stroke;
use dp_core::config::SURFACE_BACKGROUND;
use dp_core::path::{PathCmd, PathDescription};
use web_sys::CanvasRenderingContext2d;

/// Render every stroke onto a cleared surface.
pub fn render_strokes<'a>(
    ctx: &CanvasRenderingContext2d,
    strokes: impl IntoIterator<Item = &'a Stroke>,
    canvas_width: f64,
    canvas_height: f64,
) {
    ctx.set_fill_style_str(&SURFACE_BACKGROUND.to_hex());
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    for stroke in strokes {
        draw_path(ctx, &PathDescription::of(stroke));
    }
}

/// Stroke one polyline. Empty strokes draw nothing; a single point draws a
/// zero-length segment so the round cap leaves a dot.
fn draw_path(ctx: &CanvasRenderingContext2d, desc: &PathDescription) {
    let Some((first, rest)) = desc.commands.split_first() else {
        return;
    };

    ctx.save();
    ctx.begin_path();
    let (x0, y0) = match *first {
        PathCmd::MoveTo(x, y) | PathCmd::LineTo(x, y) => (x as f64, y as f64),
    };
    ctx.move_to(x0, y0);
    if rest.is_empty() {
        ctx.line_to(x0, y0);
    }
    for cmd in rest {
        match *cmd {
            PathCmd::MoveTo(x, y) => ctx.move_to(x as f64, y as f64),
            PathCmd::LineTo(x, y) => ctx.line_to(x as f64, y as f64),
        }
    }

    ctx.set_line_cap(desc.cap.as_str());
    ctx.set_line_join(desc.join.as_str());
    ctx.set_stroke_style_str(&desc.color.to_hex());
    ctx.set_line_width(desc.width as f64);
    ctx.stroke();
    ctx.restore();
}
