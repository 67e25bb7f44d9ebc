//! Strokes → Vello drawing commands.
//!
//! Fills the surface background, then strokes every renderable stroke in
//! order as a polyline with round caps and joins. Nothing is filled.

use crate::surface::SurfaceConfig;
use dp_core::config::SURFACE_BACKGROUND;
use dp_core::path::{PathCmd, PathDescription, StrokeCap, StrokeJoin};
use dp_core::{Color as StrokeColor, Stroke};
use kurbo::{Affine, BezPath, Cap, Join, Stroke as KurboStroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Paint the canvas to a Vello scene.
///
/// Call once per frame with a freshly-cleared `Scene`, passing
/// `CanvasState::renderable_strokes()`. The caller presents the scene.
pub fn paint_canvas<'a>(
    scene: &mut Scene,
    strokes: impl IntoIterator<Item = &'a Stroke>,
    surface: SurfaceConfig,
) {
    scene.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        to_peniko(SURFACE_BACKGROUND),
        None,
        &surface.bounds(),
    );

    for stroke in strokes {
        paint_stroke(scene, &PathDescription::of(stroke));
    }
}

fn paint_stroke(scene: &mut Scene, desc: &PathDescription) {
    let Some(path) = to_bez_path(&desc.commands) else {
        log::trace!("skip empty stroke {}", desc.id);
        return;
    };
    log::trace!("PAINT stroke {} ({} segments)", desc.id, desc.commands.len());
    scene.stroke(
        &stroke_style(desc),
        Affine::IDENTITY,
        to_peniko(desc.color),
        None,
        &path,
    );
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Build the kurbo path. `None` for an empty command list; a lone `MoveTo`
/// gets a zero-length segment so round caps leave a dot.
pub fn to_bez_path(commands: &[PathCmd]) -> Option<BezPath> {
    let (first, rest) = commands.split_first()?;
    let mut bez = BezPath::new();
    let origin = point_of(*first);
    bez.move_to(origin);

    if rest.is_empty() {
        bez.line_to(origin);
    }
    for cmd in rest {
        match *cmd {
            PathCmd::MoveTo(x, y) => bez.move_to((x as f64, y as f64)),
            PathCmd::LineTo(x, y) => bez.line_to((x as f64, y as f64)),
        }
    }
    Some(bez)
}

pub fn stroke_style(desc: &PathDescription) -> KurboStroke {
    KurboStroke::new(desc.width as f64)
        .with_caps(map_cap(desc.cap))
        .with_join(map_join(desc.join))
}

fn point_of(cmd: PathCmd) -> (f64, f64) {
    match cmd {
        PathCmd::MoveTo(x, y) | PathCmd::LineTo(x, y) => (x as f64, y as f64),
    }
}

fn map_cap(cap: StrokeCap) -> Cap {
    match cap {
        StrokeCap::Butt => Cap::Butt,
        StrokeCap::Round => Cap::Round,
        StrokeCap::Square => Cap::Square,
    }
}

fn map_join(join: StrokeJoin) -> Join {
    match join {
        StrokeJoin::Miter => Join::Miter,
        StrokeJoin::Round => Join::Round,
        StrokeJoin::Bevel => Join::Bevel,
    }
}

fn to_peniko(color: StrokeColor) -> Color {
    let [r, g, b, a] = color.to_rgba8();
    Color::from_rgba8(r, g, b, a)
}
