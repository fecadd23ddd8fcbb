//! Rasterizer configuration.

use common::{Color, RasterError, RasterResult};

/// Rasterizer configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Color the buffer is cleared to before any element is drawn.
    pub background: Color,
    /// Fixed parameter increment used when flattening quadratic Beziers.
    pub bezier_step: f64,
    /// Number of radii drawn for a circle stroke.
    pub circle_stroke_samples: u32,
    /// Whether polygons that cannot be filled still get their outline.
    pub stroke_unsupported_polygons: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the Bezier flattening step.
    pub fn with_bezier_step(mut self, step: f64) -> Self {
        self.bezier_step = step;
        self
    }

    /// Set the number of circle stroke radii.
    pub fn with_circle_stroke_samples(mut self, samples: u32) -> Self {
        self.circle_stroke_samples = samples;
        self
    }

    /// Set whether unsupported polygons are still outlined.
    pub fn with_unsupported_polygon_stroke(mut self, enabled: bool) -> Self {
        self.stroke_unsupported_polygons = enabled;
        self
    }

    /// Reject settings under which rasterization would not terminate.
    pub fn validate(&self) -> RasterResult<()> {
        if !(self.bezier_step > 0.0 && self.bezier_step <= 1.0) {
            return Err(RasterError::config(format!(
                "bezier_step must be in (0, 1], got {}",
                self.bezier_step
            )));
        }
        if self.circle_stroke_samples == 0 {
            return Err(RasterError::config("circle_stroke_samples must be at least 1"));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            bezier_step: 0.001,
            circle_stroke_samples: 720,
            stroke_unsupported_polygons: true,
        }
    }
}
