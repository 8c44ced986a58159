//! Catmull-Rom spline evaluation for stroke smoothing.
//!
//! Hosts run recorded pen positions through [`smooth_polyline`] to turn a
//! jittery mouse trail into a smooth curve before stamping it.

use glam::Vec2;

/// Evaluate the uniform Catmull-Rom spline through `p1` and `p2` at
/// parameter `t` in `[0, 1]`, with `p0` and `p3` as the neighboring control
/// points.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use paintkit::spline::catmull_rom;
///
/// let p0 = Vec2::new(-1.0, 0.0);
/// let p1 = Vec2::new(0.0, 0.0);
/// let p2 = Vec2::new(1.0, 1.0);
/// let p3 = Vec2::new(2.0, 1.0);
/// assert_eq!(catmull_rom(p0, p1, p2, p3, 0.0), p1);
/// assert_eq!(catmull_rom(p0, p1, p2, p3, 1.0), p2);
/// ```
pub fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * (p1 - p2) + p3 - p0) * t3)
}

/// Sample a Catmull-Rom curve through a point chain.
///
/// Each consecutive pair of input points becomes a spline segment sampled
/// `samples_per_segment` times; endpoints are clamped by repeating the first
/// and last points as phantom controls. The output starts at the first input
/// point and passes through every input point in order.
pub fn smooth_polyline(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    if points.len() < 2 || samples_per_segment == 0 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut out = Vec::with_capacity(last * samples_per_segment + 1);
    out.push(points[0]);

    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];
        for s in 1..=samples_per_segment {
            let t = s as f32 / samples_per_segment as f32;
            out.push(catmull_rom(p0, p1, p2, p3, t));
        }
    }

    out
}
