use dp_core::Stroke;
use dp_core::config::SURFACE_BACKGROUND;
use dp_core::path::PathDescription;
use std::fmt::Write as _;

/// SVG markup for the drawing surface: a background rect sized to the
/// surface, then one unfilled `<path>` per stroke with round caps and joins.
pub fn render_svg<'a>(
    strokes: impl IntoIterator<Item = &'a Stroke>,
    width: f64,
    height: f64,
) -> String {
    let mut svg = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    let _ = writeln!(
        svg,
        "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"{}\" />",
        SURFACE_BACKGROUND.to_hex()
    );

    for stroke in strokes {
        let desc = PathDescription::of(stroke);
        let _ = writeln!(
            svg,
            "  <path data-id=\"{}\" d=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\" stroke-linejoin=\"{}\" fill=\"none\" />",
            desc.id.get(),
            desc.data(),
            desc.color.to_hex(),
            desc.width,
            desc.cap.as_str(),
            desc.join.as_str(),
        );
    }

    svg.push_str("</svg>");
    svg
}
