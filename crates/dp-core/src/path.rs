//! Stroke → vector path description.
//!
//! A stroke renders as a polyline: move to the first point, then straight
//! segments through the rest, stroked with round caps and joins, never
//! filled. Renderers (Canvas2D, SVG, Vello) all consume `PathCmd`s.

use crate::id::StrokeId;
use crate::model::{Color, Point, Stroke};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeJoin {
    Miter,
    Round,
    Bevel,
}

impl StrokeCap {
    /// Keyword shared by SVG `stroke-linecap` and Canvas2D `lineCap`.
    pub fn as_str(self) -> &'static str {
        match self {
            StrokeCap::Butt => "butt",
            StrokeCap::Round => "round",
            StrokeCap::Square => "square",
        }
    }
}

impl StrokeJoin {
    /// Keyword shared by SVG `stroke-linejoin` and Canvas2D `lineJoin`.
    pub fn as_str(self) -> &'static str {
        match self {
            StrokeJoin::Miter => "miter",
            StrokeJoin::Round => "round",
            StrokeJoin::Bevel => "bevel",
        }
    }
}

/// Everything a renderer needs to draw one stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDescription {
    pub id: StrokeId,
    pub color: Color,
    pub width: f32,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
    pub commands: Vec<PathCmd>,
}

impl PathDescription {
    pub fn of(stroke: &Stroke) -> Self {
        Self {
            id: stroke.id,
            color: stroke.color,
            width: stroke.width,
            cap: StrokeCap::Round,
            join: StrokeJoin::Round,
            commands: polyline(&stroke.points),
        }
    }

    /// SVG path data for this stroke.
    pub fn data(&self) -> String {
        path_data(&self.commands)
    }
}

/// `MoveTo` the first point, `LineTo` every following one. Empty in, empty out.
pub fn polyline(points: &[Point]) -> Vec<PathCmd> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };
    std::iter::once(PathCmd::MoveTo(first.x, first.y))
        .chain(rest.iter().map(|p| PathCmd::LineTo(p.x, p.y)))
        .collect()
}

/// Format commands as SVG path data: `M 0 0 L 10 0 L 10 10`.
///
/// Coordinates are written as given. Non-finite values come out as `NaN`,
/// `inf` or `-inf`, which SVG parsers reject; callers feeding raw host
/// input should filter those before capture.
pub fn path_data(commands: &[PathCmd]) -> String {
    let mut d = String::with_capacity(commands.len() * 12);
    for cmd in commands {
        if !d.is_empty() {
            d.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = match *cmd {
            PathCmd::MoveTo(x, y) => write!(d, "M {x} {y}"),
            PathCmd::LineTo(x, y) => write!(d, "L {x} {y}"),
        };
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stroke(points: &[(f32, f32)]) -> Stroke {
        Stroke {
            id: StrokeId::new(1),
            color: Color::rgb8(0, 0, 0),
            width: 4.0,
            points: points.iter().copied().map(Point::from).collect(),
        }
    }

    #[test]
    fn polyline_path_data() {
        let desc = PathDescription::of(&stroke(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
        assert_eq!(desc.data(), "M 0 0 L 10 0 L 10 10");
        assert_eq!(desc.cap, StrokeCap::Round);
        assert_eq!(desc.join, StrokeJoin::Round);
    }

    #[test]
    fn empty_stroke_is_empty_path() {
        let desc = PathDescription::of(&stroke(&[]));
        assert!(desc.commands.is_empty());
        assert_eq!(desc.data(), "");
    }

    #[test]
    fn single_point_is_bare_move() {
        assert_eq!(polyline(&[Point::new(3.0, 4.0)]), vec![PathCmd::MoveTo(3.0, 4.0)]);
    }

    #[test]
    fn fractional_and_negative_coordinates() {
        let cmds = polyline(&[Point::new(-1.5, 2.25), Point::new(0.1, -0.0)]);
        assert_eq!(path_data(&cmds), "M -1.5 2.25 L 0.1 -0");
    }

    #[test]
    fn non_finite_coordinates_pass_through() {
        let cmds = polyline(&[
            Point::new(f32::NAN, f32::INFINITY),
            Point::new(f32::NEG_INFINITY, 1.0),
        ]);
        assert_eq!(path_data(&cmds), "M NaN inf L -inf 1");
    }
}
