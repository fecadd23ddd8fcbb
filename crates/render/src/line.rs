//! Line rasterization by linear interpolation.

use crate::canvas::{Canvas, Paint};
use crate::mapper::DevicePoint;
use common::Point;

/// Round half-up, the way device coordinates are snapped everywhere.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Sample the dependent coordinate of a segment once per unit step of the
/// independent one.
///
/// Starting at `i0`, steps `i` by one while `i <= i1` and yields
/// `round_half_up(d)` where `d` starts at `d0` and advances by the slope each
/// step. Equal independent endpoints give a single sample. A reversed range
/// or NaN input gives no samples.
///
/// Samples are produced lazily, so callers can stop at the edge of the
/// buffer without walking the rest of a long segment.
pub fn lerp(i0: f64, d0: f64, i1: f64, d1: f64) -> impl Iterator<Item = f64> {
    let slope = if i1 == i0 { 0.0 } else { (d1 - d0) / (i1 - i0) };
    unit_steps(i0, i1, true).scan(d0, move |d, _| {
        let value = round_half_up(*d);
        *d += slope;
        Some(value)
    })
}

/// `start, start + 1, ...` up to `end`.
///
/// Stops early once adding one no longer changes the value, so huge
/// coordinates cannot spin forever.
pub(crate) fn unit_steps(start: f64, end: f64, inclusive: bool) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(start), |&value| {
        let next = value + 1.0;
        (next != value).then_some(next)
    })
    .take_while(move |&value| if inclusive { value <= end } else { value < end })
}

impl Canvas<'_> {
    /// Draw a straight segment between two logical points.
    pub fn draw_line(&mut self, from: Point, to: Point, paint: Paint) {
        let from = self.mapper().map_point(from);
        let to = self.mapper().map_point(to);
        self.draw_device_line(from, to, paint);
    }

    /// Draw a straight segment between two device points, endpoints included.
    pub fn draw_device_line(&mut self, from: DevicePoint, to: DevicePoint, paint: Paint) {
        let (mut r0, mut c0) = (from.row, from.col);
        let (mut r1, mut c1) = (to.row, to.col);

        if (c1 - c0).abs() > (r1 - r0).abs() {
            // Mostly horizontal: one pixel per column.
            if c0 > c1 {
                std::mem::swap(&mut c0, &mut c1);
                std::mem::swap(&mut r0, &mut r1);
            }
            let width = self.extent().col;
            for (step, row) in lerp(c0, r0, c1, r1).enumerate() {
                let col = round_half_up(c0 + step as f64);
                if col >= width {
                    break;
                }
                self.plot(row, col, paint);
            }
        } else {
            if r0 > r1 {
                std::mem::swap(&mut c0, &mut c1);
                std::mem::swap(&mut r0, &mut r1);
            }
            let height = self.extent().row;
            for (step, col) in lerp(r0, c0, r1, c1).enumerate() {
                let row = round_half_up(r0 + step as f64);
                if row >= height {
                    break;
                }
                self.plot(row, col, paint);
            }
        }
    }
}
