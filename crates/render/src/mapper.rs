//! Logical-to-device coordinate mapping.

use common::{Point, ViewBox};

/// A position on the device grid. Not necessarily whole.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DevicePoint {
    pub row: f64,
    pub col: f64,
}

impl DevicePoint {
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }
}

/// Maps viewBox coordinates onto the `width` x `height` device grid.
///
/// The viewBox corners land exactly on the first and last device pixels, so
/// each axis is scaled by `(pixels - 1) / extent`. Inputs are `(x, y)`,
/// outputs are `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    min_x: f64,
    min_y: f64,
    col_scale: f64,
    row_scale: f64,
}

impl CoordinateMapper {
    pub fn new(view_box: ViewBox, width: u32, height: u32) -> Self {
        Self {
            min_x: view_box.min_x,
            min_y: view_box.min_y,
            col_scale: (width as f64 - 1.0) / view_box.width,
            row_scale: (height as f64 - 1.0) / view_box.height,
        }
    }

    pub fn col_scale(&self) -> f64 {
        self.col_scale
    }

    pub fn row_scale(&self) -> f64 {
        self.row_scale
    }

    /// Map a logical point to device space.
    #[inline]
    pub fn map_to_device(&self, x: f64, y: f64) -> DevicePoint {
        // Scale before subtracting the origin; the rounding of later steps
        // depends on this exact operation order.
        DevicePoint {
            row: y * self.row_scale - self.min_y * self.row_scale,
            col: x * self.col_scale - self.min_x * self.col_scale,
        }
    }

    #[inline]
    pub fn map_point(&self, point: Point) -> DevicePoint {
        self.map_to_device(point.x, point.y)
    }
}
