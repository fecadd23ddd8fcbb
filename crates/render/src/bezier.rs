//! Quadratic Bezier flattening.

use crate::canvas::{Canvas, Paint};
use common::Point;

/// Evaluate a quadratic Bezier curve at `t`.
#[inline]
pub fn quadratic_point(p0: Point, control: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * p0.x + 2.0 * u * t * control.x + t * t * p1.x,
        u * u * p0.y + 2.0 * u * t * control.y + t * t * p1.y,
    )
}

/// Sample a quadratic Bezier curve at a fixed parameter step.
///
/// The first point is `p0`; then `t` is accumulated by `step` while it
/// stays at or below one, so rounding can leave the last sample just short
/// of `p1`. Returns only `p0` when `step` is not positive.
pub fn flatten_quadratic(p0: Point, control: Point, p1: Point, step: f64) -> Vec<Point> {
    let mut points = vec![p0];
    if !(step > 0.0) {
        return points;
    }
    let mut t = step;
    while t <= 1.0 {
        points.push(quadratic_point(p0, control, p1, t));
        t += step;
    }
    points
}

impl Canvas<'_> {
    /// Stroke a quadratic Bezier curve as a chain of line segments.
    ///
    /// Segment endpoints are rounded to whole logical units before drawing.
    pub fn draw_quadratic(&mut self, p0: Point, control: Point, p1: Point, paint: Paint) {
        let points = flatten_quadratic(p0, control, p1, self.config().bezier_step);
        for pair in points.windows(2) {
            self.draw_line(pair[0].round(), pair[1].round(), paint);
        }
    }
}
