//! Drawing surface shared by the primitive rasterizers.

use crate::config::RenderConfig;
use crate::mapper::{CoordinateMapper, DevicePoint};
use crate::pixel_buffer::PixelBuffer;
use common::Color;

/// A color together with the opacity it is composited at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub alpha: f64,
}

impl Paint {
    pub const fn new(color: Color, alpha: f64) -> Self {
        Self { color, alpha }
    }

    pub const fn opaque(color: Color) -> Self {
        Self { color, alpha: 1.0 }
    }
}

/// A pixel buffer bound to a coordinate mapping and a configuration.
///
/// Primitive rasterizers are implemented as methods on `Canvas` in their own
/// modules (`line`, `circle`, `polygon`, `bezier`, `path`).
pub struct Canvas<'a> {
    buffer: &'a mut PixelBuffer,
    mapper: CoordinateMapper,
    config: &'a RenderConfig,
}

impl<'a> Canvas<'a> {
    pub fn new(
        buffer: &'a mut PixelBuffer,
        mapper: CoordinateMapper,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            buffer,
            mapper,
            config,
        }
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// One past the last device row and column of the buffer.
    pub(crate) fn extent(&self) -> DevicePoint {
        DevicePoint::new(self.buffer.height() as f64, self.buffer.width() as f64)
    }

    /// Composite `paint` onto the device pixel at (`row`, `col`).
    #[inline]
    pub(crate) fn plot(&mut self, row: f64, col: f64, paint: Paint) {
        self.buffer.blend_at(row, col, paint.color, paint.alpha);
    }
}
