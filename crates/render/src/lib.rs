//! Rasterization engine for 2-D vector scenes.
//!
//! This crate handles:
//! - Mapping viewBox coordinates onto the device pixel grid
//! - Scan conversion of lines, circles, polygons and quadratic Bezier paths
//! - Alpha compositing into an RGBA pixel buffer

pub mod bezier;
pub mod canvas;
pub mod circle;
pub mod config;
pub mod line;
pub mod mapper;
pub mod path;
pub mod pixel_buffer;
pub mod polygon;
pub mod rasterizer;
pub mod triangulate;

pub use canvas::{Canvas, Paint};
pub use config::RenderConfig;
pub use line::lerp;
pub use mapper::{CoordinateMapper, DevicePoint};
pub use path::{parse_path_data, PathCommand, PathCursor};
pub use pixel_buffer::PixelBuffer;
pub use rasterizer::{render_scene, Rasterizer};
pub use triangulate::{triangulate, Triangle};
