//! RGBA pixel buffer and the compositing write path.

use common::{Color, RasterError, RasterResult};

/// Pixel buffer for rasterization output.
///
/// Pixels are addressed by `(row, col)` and stored row-major, 4 bytes per
/// pixel. Every blended pixel is left fully opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize * 4;
        Self {
            width,
            height,
            data: vec![0; size],
        }
    }

    /// Wrap existing RGBA bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> RasterResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill with an opaque color.
    pub fn fill(&mut self, color: Color) {
        for chunk in self.data.chunks_exact_mut(4) {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
            chunk[3] = 255;
        }
    }

    fn offset(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height as i64 || col >= self.width as i64 {
            return None;
        }
        Some((row as usize * self.width as usize + col as usize) * 4)
    }

    /// Get the color at a pixel, or `None` outside the buffer.
    pub fn get_pixel(&self, row: u32, col: u32) -> Option<Color> {
        let offset = self.offset(row as i64, col as i64)?;
        Some(Color::rgb(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ))
    }

    /// Get the alpha byte at a pixel, or `None` outside the buffer.
    pub fn alpha_at(&self, row: u32, col: u32) -> Option<u8> {
        let offset = self.offset(row as i64, col as i64)?;
        Some(self.data[offset + 3])
    }

    /// Blend `color` over the pixel at `(row, col)` with opacity `alpha`.
    ///
    /// Writes outside the buffer are dropped silently.
    pub fn blend_pixel(&mut self, row: i64, col: i64, color: Color, alpha: f64) {
        let Some(offset) = self.offset(row, col) else {
            return;
        };

        let background = Color::rgb(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        );
        let blended = color.blend_over(background, alpha);
        self.data[offset] = blended.r;
        self.data[offset + 1] = blended.g;
        self.data[offset + 2] = blended.b;
        self.data[offset + 3] = 255;
    }

    /// Blend at device coordinates that are expected to be whole numbers.
    ///
    /// Fractional or non-finite coordinates are logged and the write is
    /// skipped; they are never truncated onto a neighbouring pixel.
    pub fn blend_at(&mut self, row: f64, col: f64, color: Color, alpha: f64) {
        if row.fract() != 0.0 || col.fract() != 0.0 {
            tracing::warn!("Cannot blend pixel at fractional row/col ({}, {})", row, col);
            return;
        }
        self.blend_pixel(row as i64, col as i64, color, alpha);
    }

    /// Get as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the raw bytes back.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
