//! Geometric primitives in logical (viewBox) space.

use crate::error::{RasterError, RasterResult};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A 2D point in logical coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflect `self` through `center`: `center + (center - self)`.
    #[inline]
    pub fn reflect_through(&self, center: Point) -> Point {
        center + (center - *self)
    }

    /// Round both coordinates half-up to the nearest integer.
    #[inline]
    pub fn round(&self) -> Point {
        Point::new((self.x + 0.5).floor(), (self.y + 0.5).floor())
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The logical rectangle a scene is drawn in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Create a view box, rejecting non-finite values and empty extents.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> RasterResult<Self> {
        let view_box = Self { min_x, min_y, width, height };
        view_box.validate()?;
        Ok(view_box)
    }

    /// Check that the view box can be mapped onto a device grid.
    pub fn validate(&self) -> RasterResult<()> {
        let values = [self.min_x, self.min_y, self.width, self.height];
        if !values.iter().all(|v| v.is_finite()) {
            return Err(RasterError::view_box(format!(
                "non-finite value in {} {} {} {}",
                self.min_x, self.min_y, self.width, self.height
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(RasterError::view_box(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl FromStr for ViewBox {
    type Err = RasterError;

    /// Parse the `"minX minY width height"` form. Commas are accepted as
    /// separators too.
    fn from_str(s: &str) -> RasterResult<Self> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    RasterError::view_box(format!("invalid number {:?} in {:?}", token, s))
                })
            })
            .collect::<RasterResult<Vec<f64>>>()?;

        match values.as_slice() {
            &[min_x, min_y, width, height] => ViewBox::new(min_x, min_y, width, height),
            _ => Err(RasterError::view_box(format!(
                "expected 4 numbers, got {} in {:?}",
                values.len(),
                s
            ))),
        }
    }
}
