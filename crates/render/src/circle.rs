//! Circle fill and stroke.

use crate::canvas::{Canvas, Paint};
use crate::line::unit_steps;
use common::Point;
use std::f64::consts::PI;

impl Canvas<'_> {
    /// Fill a circle with the midpoint algorithm.
    ///
    /// Center and radius are used as device coordinates directly; the
    /// viewBox mapping is not applied. Each octant step fills the vertical
    /// spans `cy-y..=cy+y` at columns `cx±x` and `cy-x..=cy+x` at `cx±y`,
    /// so interior pixels can be blended more than once.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, paint: Paint) {
        if !(cx.is_finite() && cy.is_finite() && r.is_finite()) {
            return;
        }

        let mut x = r - 1.0;
        let mut y = 0.0;
        let mut dx = 1.0;
        let mut dy = 1.0;
        let mut err = dx - r * 2.0;
        let height = self.extent().row;

        while x >= y {
            for row in unit_steps(cy - y, cy + y, true).take_while(|&row| row < height) {
                self.plot(row, cx + x, paint);
                self.plot(row, cx - x, paint);
            }
            for row in unit_steps(cy - x, cy + x, true).take_while(|&row| row < height) {
                self.plot(row, cx + y, paint);
                self.plot(row, cx - y, paint);
            }

            if err <= 0.0 {
                y += 1.0;
                err += dy;
                dy += 2.0;
            }
            if err > 0.0 {
                x -= 1.0;
                dx += 2.0;
                err += dx - r * 2.0;
            }
        }
    }

    /// Stroke a circle as evenly spaced radii from the rim to the center.
    ///
    /// Rim and center are mapped to device space and the resulting
    /// `(col, row)` pairs are handed to [`Canvas::draw_line`], which maps
    /// them again.
    pub fn stroke_circle(&mut self, cx: f64, cy: f64, r: f64, paint: Paint) {
        let samples = self.config().circle_stroke_samples;
        let step = 360.0 / samples as f64;
        let center = self.mapper().map_to_device(cx, cy);

        for k in 0..samples {
            let radians = k as f64 * step * PI / 180.0;
            let rim = self
                .mapper()
                .map_to_device(cx + r * radians.cos(), cy + r * radians.sin());
            self.draw_line(
                Point::new(rim.col, rim.row),
                Point::new(center.col, center.row),
                paint,
            );
        }
    }
}
