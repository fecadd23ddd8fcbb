//! Scene elements.

use crate::lenient;
use common::{parse_color, Color, Point};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Paint attributes shared by every drawable element.
///
/// Attribute names are accepted in both the hyphenated SVG spelling and the
/// underscore spelling (`fill-opacity` / `fill_opacity`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Stroke color text (`#rrggbb` or `rgb(r, g, b)`).
    pub stroke: Option<String>,
    /// Fill color text.
    pub fill: Option<String>,
    pub stroke_opacity: Option<f64>,
    pub fill_opacity: Option<f64>,
    /// Accepted for completeness; strokes are always one device pixel wide.
    pub stroke_width: Option<f64>,
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StyleVisitor)
    }
}

struct StyleVisitor;

impl<'de> Visitor<'de> for StyleVisitor {
    type Value = Style;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of style attributes")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Style, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut style = Style::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "stroke" => style.stroke = lenient::to_color(map.next_value()?),
                "fill" => style.fill = lenient::to_color(map.next_value()?),
                "stroke-opacity" | "stroke_opacity" => {
                    style.stroke_opacity = lenient::to_opacity(map.next_value()?);
                }
                "fill-opacity" | "fill_opacity" => {
                    style.fill_opacity = lenient::to_opacity(map.next_value()?);
                }
                "stroke-width" | "stroke_width" | "strokeWidth" => {
                    style.stroke_width = lenient::to_length(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(style)
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke color text.
    pub fn with_stroke(mut self, color: &str) -> Self {
        self.stroke = Some(color.to_string());
        self
    }

    /// Set the fill color text.
    pub fn with_fill(mut self, color: &str) -> Self {
        self.fill = Some(color.to_string());
        self
    }

    pub fn with_stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = Some(opacity);
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    /// Whether a non-empty stroke color was given.
    pub fn has_stroke(&self) -> bool {
        self.stroke.as_deref().map_or(false, |stroke| !stroke.trim().is_empty())
    }

    /// Stroke color, black when absent or malformed.
    pub fn stroke_color(&self) -> Color {
        parse_color(self.stroke.as_deref())
    }

    /// Fill color, black when absent or malformed.
    pub fn fill_color(&self) -> Color {
        parse_color(self.fill.as_deref())
    }

    pub fn stroke_alpha(&self) -> f64 {
        self.stroke_opacity.unwrap_or(1.0)
    }

    pub fn fill_alpha(&self) -> f64 {
        self.fill_opacity.unwrap_or(1.0)
    }
}

/// A single pixel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PointElement {
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number")]
    pub x: f64,
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number")]
    pub y: f64,
    #[serde(default, deserialize_with = "lenient::color")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient::opacity")]
    pub opacity: Option<f64>,
}

/// A straight segment from `(x1, y1)` to `(x2, y2)`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LineElement {
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number")]
    pub x1: f64,
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number")]
    pub y1: f64,
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number")]
    pub x2: f64,
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number")]
    pub y2: f64,
    #[serde(flatten)]
    pub style: Style,
}

/// An open chain of segments.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PolylineElement {
    #[serde(default, deserialize_with = "lenient::points")]
    pub points: Vec<Point>,
    #[serde(flatten)]
    pub style: Style,
}

/// A closed, filled shape of 3 or 4 points.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PolygonElement {
    #[serde(default, deserialize_with = "lenient::points")]
    pub points: Vec<Point>,
    #[serde(flatten)]
    pub style: Style,
}

/// A filled circle with an optional stroke.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CircleElement {
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number")]
    pub cx: f64,
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number")]
    pub cy: f64,
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number")]
    pub r: f64,
    #[serde(flatten)]
    pub style: Style,
}

/// A path of `M`, `L`, `Q`, `T` and `Z` commands.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PathElement {
    #[serde(default, deserialize_with = "lenient::text")]
    pub d: String,
    #[serde(flatten)]
    pub style: Style,
}

/// A scene element, tagged by its `type` field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Point(PointElement),
    Line(LineElement),
    Polyline(PolylineElement),
    Polygon(PolygonElement),
    Circle(CircleElement),
    Path(PathElement),
    /// Any other `type`; skipped when rendering.
    #[serde(other)]
    Unknown,
}

impl Element {
    pub fn point(at: Point, color: &str) -> Self {
        Element::Point(PointElement {
            x: at.x,
            y: at.y,
            color: Some(color.to_string()),
            opacity: None,
        })
    }

    pub fn line(from: Point, to: Point, style: Style) -> Self {
        Element::Line(LineElement {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            style,
        })
    }

    pub fn polyline(points: Vec<Point>, style: Style) -> Self {
        Element::Polyline(PolylineElement { points, style })
    }

    pub fn polygon(points: Vec<Point>, style: Style) -> Self {
        Element::Polygon(PolygonElement { points, style })
    }

    pub fn circle(center: Point, r: f64, style: Style) -> Self {
        Element::Circle(CircleElement {
            cx: center.x,
            cy: center.y,
            r,
            style,
        })
    }

    pub fn path(d: &str, style: Style) -> Self {
        Element::Path(PathElement {
            d: d.to_string(),
            style,
        })
    }

    /// The element's `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Point(_) => "point",
            Element::Line(_) => "line",
            Element::Polyline(_) => "polyline",
            Element::Polygon(_) => "polygon",
            Element::Circle(_) => "circle",
            Element::Path(_) => "path",
            Element::Unknown => "unknown",
        }
    }
}
