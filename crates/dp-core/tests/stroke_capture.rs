//! Integration tests: stroke capture → commit → undo/clear → path data.
//!
//! Exercises `CanvasState` the way a pointer stream drives it and checks
//! the renderable projection after each step.

use dp_core::config::{PALETTE, WIDTHS};
use dp_core::path::PathDescription;
use dp_core::{CanvasState, CapturePhase, Point, StrokeId};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

fn draw(canvas: &mut CanvasState, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().expect("at least one point");
    canvas.begin_stroke(Point::from(*first));
    for &pt in rest {
        canvas.extend_stroke(Point::from(pt));
    }
    canvas.commit_stroke();
}

// ─── Capture ────────────────────────────────────────────────────────────

#[test]
fn committed_points_match_input_exactly() {
    init_logging();
    let mut canvas = CanvasState::new();
    let input = [(0.0, 0.0), (0.5, 0.25), (0.5, 0.25), (-3.0, 100.0), (1e6, -1e6)];
    draw(&mut canvas, &input);

    let expected: Vec<Point> = input.iter().copied().map(Point::from).collect();
    assert_eq!(canvas.completed_strokes()[0].points, expected);
}

#[test]
fn three_point_stroke_scenario() {
    init_logging();
    let mut canvas = CanvasState::new();
    canvas.begin_stroke(p(0.0, 0.0));
    canvas.extend_stroke(p(10.0, 0.0));
    canvas.extend_stroke(p(10.0, 10.0));
    canvas.commit_stroke();

    let done = canvas.completed_strokes();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].points, vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)]);

    let rendered: Vec<_> = canvas.renderable_strokes().collect();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0], &done[0]);
    assert_eq!(
        PathDescription::of(rendered[0]).data(),
        "M 0 0 L 10 0 L 10 10"
    );
}

#[test]
fn in_progress_stroke_renders_live() {
    init_logging();
    let mut canvas = CanvasState::new();
    draw(&mut canvas, &[(0.0, 0.0)]);
    canvas.begin_stroke(p(5.0, 5.0));
    canvas.extend_stroke(p(6.0, 6.0));

    let rendered: Vec<_> = canvas.renderable_strokes().collect();
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[1].points, vec![p(5.0, 5.0), p(6.0, 6.0)]);
    assert_eq!(canvas.completed_strokes().len(), 1);
}

#[test]
fn cancel_never_commits() {
    init_logging();
    let mut canvas = CanvasState::new();
    canvas.begin_stroke(p(0.0, 0.0));
    for i in 0..500 {
        canvas.extend_stroke(p(i as f32, i as f32));
    }
    canvas.cancel_stroke();

    assert!(canvas.completed_strokes().is_empty());
    assert_eq!(canvas.phase(), CapturePhase::Idle);

    // Commit after cancel has nothing to commit.
    canvas.commit_stroke();
    assert!(canvas.completed_strokes().is_empty());
}

// ─── Tool settings ──────────────────────────────────────────────────────

#[test]
fn tool_change_mid_stroke_does_not_touch_active_stroke() {
    init_logging();
    let mut canvas = CanvasState::new();
    canvas.set_color(PALETTE[1]);
    canvas.set_width(WIDTHS[0]);
    canvas.begin_stroke(p(0.0, 0.0));

    canvas.set_color(PALETTE[4]);
    canvas.set_width(WIDTHS[3]);
    canvas.extend_stroke(p(1.0, 1.0));
    canvas.commit_stroke();

    let first = &canvas.completed_strokes()[0];
    assert_eq!(first.color, PALETTE[1]);
    assert_eq!(first.width, WIDTHS[0]);

    draw(&mut canvas, &[(2.0, 2.0)]);
    let second = &canvas.completed_strokes()[1];
    assert_eq!(second.color, PALETTE[4]);
    assert_eq!(second.width, WIDTHS[3]);
}

// ─── Ids ────────────────────────────────────────────────────────────────

#[test]
fn ids_strictly_increase_across_undo_and_clear() {
    init_logging();
    let mut canvas = CanvasState::new();
    let mut seen = Vec::new();

    let mut record = |canvas: &CanvasState| {
        if let Some(s) = canvas.in_progress() {
            seen.push(s.id);
        }
    };

    canvas.begin_stroke(p(0.0, 0.0));
    record(&canvas);
    canvas.commit_stroke();

    canvas.begin_stroke(p(0.0, 0.0));
    record(&canvas);
    canvas.cancel_stroke();

    canvas.undo();
    canvas.begin_stroke(p(0.0, 0.0));
    record(&canvas);
    canvas.commit_stroke();

    canvas.clear();
    canvas.begin_stroke(p(0.0, 0.0));
    record(&canvas);
    canvas.commit_stroke();

    assert_eq!(
        seen,
        vec![StrokeId::new(1), StrokeId::new(2), StrokeId::new(3), StrokeId::new(4)]
    );
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(canvas.next_id(), StrokeId::new(5));
}

// ─── Undo / clear ───────────────────────────────────────────────────────

#[test]
fn undo_on_empty_canvas_is_noop() {
    init_logging();
    let mut canvas = CanvasState::new();
    canvas.undo();
    assert!(canvas.completed_strokes().is_empty());
    assert_eq!(canvas.phase(), CapturePhase::Idle);
    assert_eq!(canvas.next_id(), StrokeId::new(1));
}

#[test]
fn undo_after_two_strokes_keeps_first() {
    init_logging();
    let mut canvas = CanvasState::new();
    draw(&mut canvas, &[(0.0, 0.0), (1.0, 1.0)]);
    draw(&mut canvas, &[(5.0, 5.0)]);
    canvas.undo();

    let done = canvas.completed_strokes();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, StrokeId::new(1));
    assert!(canvas.renderable_strokes().next().is_some());
}

#[test]
fn second_undo_is_noop() {
    init_logging();
    let mut canvas = CanvasState::new();
    draw(&mut canvas, &[(0.0, 0.0)]);
    canvas.undo();
    canvas.undo();
    assert!(canvas.completed_strokes().is_empty());
}

#[test]
fn undo_while_drawing_cancels_draw_and_pops_history() {
    init_logging();
    let mut canvas = CanvasState::new();
    draw(&mut canvas, &[(0.0, 0.0)]);
    draw(&mut canvas, &[(1.0, 1.0)]);
    canvas.begin_stroke(p(2.0, 2.0));
    canvas.undo();

    assert_eq!(canvas.phase(), CapturePhase::Idle);
    let ids: Vec<u64> = canvas.completed_strokes().iter().map(|s| s.id.get()).collect();
    assert_eq!(ids, vec![1]);

    // Pointer-move after the undo has nowhere to go.
    canvas.extend_stroke(p(3.0, 3.0));
    assert_eq!(canvas.renderable_strokes().count(), 1);
}

#[test]
fn clear_then_render_is_empty() {
    init_logging();
    let mut canvas = CanvasState::new();
    draw(&mut canvas, &[(0.0, 0.0)]);
    draw(&mut canvas, &[(1.0, 1.0)]);
    canvas.begin_stroke(p(2.0, 2.0));
    canvas.clear();

    assert_eq!(canvas.renderable_strokes().count(), 0);
    assert_eq!(canvas.phase(), CapturePhase::Idle);
}
