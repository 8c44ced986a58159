//! Brush-stroke engine: stamping tips along line segments.
//!
//! A stroke is a chain of line segments (mouse-drag deltas). Each segment is
//! walked from its start toward its end in steps of the brush spacing along
//! the brush direction, stamping the tip at every step. The final pen
//! position is returned so the next segment continues from the exact spot
//! the last stamp landed, keeping stamp spacing even across segment joints.

use crate::brush::{Brush, SPRAY_ONE_IN};
use crate::canvas::{Canvas, PaintSource};
use crate::color;
use glam::Vec2;
use rand::Rng;

/// Stamp the brush tip once, centered at `(x, y)`.
///
/// Painting cells are alpha-blended onto the canvas (an opaque source is a
/// plain overwrite); cells hanging off the canvas edge are skipped.
pub fn stamp_tip(canvas: &mut Canvas, brush: &Brush, source: &PaintSource, x: i32, y: i32) {
    let size = brush.size() as i32;
    let half = size / 2;
    for tip_y in 0..size {
        for tip_x in 0..size {
            if !brush.paints(tip_x, tip_y) {
                continue;
            }
            let px = x - half + tip_x;
            let py = y - half + tip_y;
            if canvas.contains(px, py) {
                paint_pixel(canvas, source, px as u32, py as u32);
            }
        }
    }
}

/// Stamp a sprayed tip centered at `(x, y)`: each painting cell lands with
/// probability 1 in 10.
///
/// The random source is caller-owned, so hosts decide seeding and tests can
/// replay a spray exactly.
pub fn draw_spray<R: Rng>(
    canvas: &mut Canvas,
    brush: &Brush,
    source: &PaintSource,
    x: i32,
    y: i32,
    rng: &mut R,
) {
    let size = brush.size() as i32;
    let half = size / 2;
    for tip_y in 0..size {
        for tip_x in 0..size {
            if !brush.paints(tip_x, tip_y) {
                continue;
            }
            if rng.gen_range(0..SPRAY_ONE_IN) != 0 {
                continue;
            }
            let px = x - half + tip_x;
            let py = y - half + tip_y;
            if canvas.contains(px, py) {
                paint_pixel(canvas, source, px as u32, py as u32);
            }
        }
    }
}

/// Stamp the brush along the segment from `from` to `to`, returning the
/// final pen position.
///
/// The pen advances by `spacing * direction` per stamp. The loop is tied to
/// the dominant axis - whichever of the segment's horizontal or vertical
/// extents is larger - and stops once the remaining distance on that axis no
/// longer exceeds one step, so the stamp count approximates
/// `extent / spacing` for any orientation. The returned position may
/// undershoot `to` by less than one spacing unit; feeding it back in as the
/// next segment's `from` keeps a multi-segment stroke gap-free.
///
/// A step that cannot advance toward `to` on the dominant axis (zero
/// direction, or a direction pointing away from the endpoint) returns `from`
/// unchanged.
pub fn draw_line(
    canvas: &mut Canvas,
    brush: &Brush,
    source: &PaintSource,
    from: Vec2,
    to: Vec2,
) -> Vec2 {
    let step = brush.direction() * brush.spacing();
    let mut pen = from;

    if (to.y - from.y).abs() < (to.x - from.x).abs() {
        if !advances(step.x, to.x - from.x) {
            return pen;
        }
        while step.x.abs() < (to.x - pen.x).abs() {
            pen += step;
            stamp_tip(canvas, brush, source, pen.x.round() as i32, pen.y.round() as i32);
        }
    } else {
        if !advances(step.y, to.y - from.y) {
            return pen;
        }
        while step.y.abs() < (to.y - pen.y).abs() {
            pen += step;
            stamp_tip(canvas, brush, source, pen.x.round() as i32, pen.y.round() as i32);
        }
    }

    pen
}

/// Whether a per-step displacement makes progress along a span. A zero or
/// opposing step would walk the pen away from the endpoint forever.
fn advances(step: f32, span: f32) -> bool {
    step != 0.0 && span != 0.0 && step.signum() == span.signum()
}

fn paint_pixel(canvas: &mut Canvas, source: &PaintSource, x: u32, y: u32) {
    let src = source.sample(x, y);
    let alpha = src.0[3] as f32 / 255.0;
    let blended = color::lerp(canvas.get(x, y), src, alpha);
    canvas.set(x, y, blended);
}
