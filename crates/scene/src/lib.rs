//! Scene model for the rasterizer.
//!
//! A [`Scene`] is a viewBox, an output size and an ordered list of
//! [`Element`]s. Scenes are usually deserialized from loosely typed records
//! where numbers may arrive as strings; the [`lenient`] module holds the
//! field parsers that keep such input renderable.

pub mod element;
pub mod lenient;
pub mod scene;

pub use element::{
    CircleElement, Element, LineElement, PathElement, PointElement, PolygonElement,
    PolylineElement, Style,
};
pub use lenient::parse_points;
pub use self::scene::Scene;
