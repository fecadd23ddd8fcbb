//! Common error types.

use thiserror::Error;

/// Main error type for the rasterizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid viewBox: {0}")]
    InvalidViewBox(String),

    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Unsupported polygon: {0} points (only 3 and 4 point polygons can be filled)")]
    UnsupportedPolygon(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type RasterResult<T> = Result<T, RasterError>;

impl RasterError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn view_box(msg: impl Into<String>) -> Self {
        Self::InvalidViewBox(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
