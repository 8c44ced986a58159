//! End-to-end coverage of the fill and stroke engines on real canvases.

use glam::Vec2;
use image::Rgba;
use paintkit::brush::Brush;
use paintkit::canvas::{Canvas, PaintSource};
use paintkit::color::{BLACK, WHITE};
use paintkit::fill::{flood_fill_color, flood_fill_pattern};
use paintkit::stroke::draw_line;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn count_pixels(canvas: &Canvas, color: Rgba<u8>) -> usize {
    let mut count = 0;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.get(x, y) == color {
                count += 1;
            }
        }
    }
    count
}

fn pen_brush(spacing: f32) -> Brush {
    let mut brush = Brush::from_tip(&Canvas::new(1, 1, BLACK), spacing);
    brush.set_direction(Vec2::new(1.0, 0.0));
    brush
}

#[test]
fn test_fill_around_single_pixel_wall() {
    // 4x4 canvas of A with one B pixel at (2, 2): the fill from (0, 0) must
    // claim the 15 connected A pixels and leave the wall alone.
    let mut canvas = Canvas::new(4, 4, WHITE);
    canvas.set(2, 2, BLACK);

    let report = flood_fill_color(&mut canvas, 0, 0, RED).unwrap();

    assert_eq!(report.pixels_filled, 15);
    assert_eq!(count_pixels(&canvas, RED), 15);
    assert_eq!(canvas.get(2, 2), BLACK);
}

#[test]
fn test_fill_is_idempotent() {
    let mut canvas = Canvas::new(6, 6, WHITE);
    canvas.set(3, 3, BLACK);

    let first = flood_fill_color(&mut canvas, 0, 0, RED).unwrap();
    assert_eq!(first.pixels_filled, 35);
    let after_first = canvas.clone();

    // Refilling anywhere in the new region with the same color changes
    // nothing: the no-op short-circuit fires before any scanning.
    let second = flood_fill_color(&mut canvas, 5, 5, RED).unwrap();
    assert_eq!(second.pixels_filled, 0);
    assert_eq!(second.warnings.len(), 1);
    assert_eq!(canvas, after_first);
}

#[test]
fn test_fill_uniform_canvas_from_any_interior_seed() {
    for (seed_x, seed_y) in [(0, 0), (3, 2), (6, 4)] {
        let mut canvas = Canvas::new(7, 5, GREEN);
        let report = flood_fill_color(&mut canvas, seed_x, seed_y, BLUE).unwrap();
        assert_eq!(report.pixels_filled, 35);
        assert_eq!(count_pixels(&canvas, BLUE), 35);
    }
}

#[test]
fn test_fill_respects_disconnected_same_color_regions() {
    // Same color on both sides of a full-height wall; only the seeded side
    // may change.
    let mut canvas = Canvas::new(5, 3, WHITE);
    for y in 0..3 {
        canvas.set(2, y, BLACK);
    }

    flood_fill_color(&mut canvas, 1, 1, RED).unwrap();

    assert_eq!(count_pixels(&canvas, RED), 6);
    for y in 0..3 {
        assert_eq!(canvas.get(3, y), WHITE);
        assert_eq!(canvas.get(4, y), WHITE);
    }
}

#[test]
fn test_fill_pattern_tiles_whole_region() {
    let mut canvas = Canvas::new(6, 6, WHITE);
    canvas.set(3, 3, BLACK);

    // 2x2 checkerboard.
    let mut checker = Canvas::new(2, 2, GREEN);
    checker.set(0, 0, BLUE);
    checker.set(1, 1, BLUE);

    let report = flood_fill_pattern(&mut canvas, 0, 0, &checker).unwrap();
    assert_eq!(report.pixels_filled, 35);

    // Pattern cells line up with absolute canvas coordinates.
    assert_eq!(canvas.get(0, 0), BLUE);
    assert_eq!(canvas.get(1, 0), GREEN);
    assert_eq!(canvas.get(4, 2), BLUE);
    assert_eq!(canvas.get(3, 3), BLACK);
}

#[test]
fn test_stroke_stamps_at_spacing_multiples() {
    let mut canvas = Canvas::new(110, 3, WHITE);
    let brush = pen_brush(10.0);

    let pen = draw_line(
        &mut canvas,
        &brush,
        &PaintSource::Solid(RED),
        Vec2::new(0.0, 1.0),
        Vec2::new(100.0, 1.0),
    );

    // Stamps at 10, 20, ..., 90; the largest spacing multiple under 100 is
    // the final pen position.
    assert_eq!(pen.x, 90.0);
    for k in 1..=9 {
        assert_eq!(canvas.get(10 * k, 1), RED, "expected stamp at x = {}", 10 * k);
    }
    assert_eq!(count_pixels(&canvas, RED), 9);
}

#[test]
fn test_chained_segments_keep_even_spacing_across_the_joint() {
    let mut canvas = Canvas::new(110, 3, WHITE);
    let brush = pen_brush(10.0);
    let source = PaintSource::Solid(RED);

    let joint = draw_line(&mut canvas, &brush, &source, Vec2::new(0.0, 1.0), Vec2::new(47.0, 1.0));
    assert_eq!(joint.x, 40.0);

    let pen = draw_line(&mut canvas, &brush, &source, joint, Vec2::new(100.0, 1.0));
    assert_eq!(pen.x, 90.0);

    // Every consecutive pair of stamps is exactly one spacing apart - no gap
    // and no doubled stamp where the segments meet.
    let stamps: Vec<u32> =
        (0..canvas.width()).filter(|&x| canvas.get(x, 1) == RED).collect();
    assert_eq!(stamps.first(), Some(&10));
    assert_eq!(stamps.last(), Some(&90));
    for pair in stamps.windows(2) {
        assert_eq!(pair[1] - pair[0], 10);
    }
}

#[test]
fn test_wide_brush_stroke_paints_contiguous_band() {
    let mut canvas = Canvas::new(40, 9, WHITE);
    let mut brush = Brush::from_tip(&Canvas::new(4, 4, BLACK), 0.5);
    brush.set_direction(Vec2::new(1.0, 0.0));
    assert_eq!(brush.spacing(), 2.0);

    draw_line(
        &mut canvas,
        &brush,
        &PaintSource::Solid(BLUE),
        Vec2::new(2.0, 4.0),
        Vec2::new(30.0, 4.0),
    );

    // Spacing at half the tip width leaves no hole between stamps.
    for x in 4..=28 {
        assert_eq!(canvas.get(x, 4), BLUE, "hole at x = {}", x);
    }
    // Rows outside the tip height stay untouched.
    assert_eq!(count_pixels(&canvas, BLUE) % 4, 0);
    for x in 0..40 {
        assert_eq!(canvas.get(x, 0), WHITE);
        assert_eq!(canvas.get(x, 8), WHITE);
    }
}

#[test]
fn test_fill_then_stroke_compose() {
    let mut canvas = Canvas::new(20, 20, WHITE);
    flood_fill_color(&mut canvas, 0, 0, GREEN).unwrap();

    let brush = pen_brush(3.0);
    draw_line(
        &mut canvas,
        &brush,
        &PaintSource::Solid(RED),
        Vec2::new(0.0, 10.0),
        Vec2::new(19.0, 10.0),
    );

    // A later fill seeded on the untouched background only claims the
    // background color, not the stroke.
    let report = flood_fill_color(&mut canvas, 0, 0, BLUE).unwrap();
    assert_eq!(canvas.get(0, 10), BLUE);
    assert_eq!(canvas.get(3, 10), RED);
    assert!(report.pixels_filled > 0);
    assert_eq!(count_pixels(&canvas, RED), 6);
}
