//! Common types shared by the scene model and the rasterizer.

pub mod color;
pub mod geometry;
pub mod error;

pub use color::{parse_color, Color};
pub use geometry::{Point, ViewBox};
pub use error::{RasterError, RasterResult};
