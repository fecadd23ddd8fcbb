//! Tolerant field parsers for scene records.
//!
//! Scene records often carry numbers as strings (`"cx": "5"`). These helpers
//! accept either form. Unparsable coordinates become NaN, which rasterizes to
//! nothing; unparsable or negative opacities are treated as absent so the
//! element falls back to full opacity. A value of the wrong JSON type is
//! treated the same way as unparsable text, so one bad field never rejects the
//! whole scene.

use crate::element::Element;
use common::Point;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// A number that may arrive as text.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrText {
    Number(f64),
    Text(String),
    /// `null`, a boolean, an array or a map.
    Other(IgnoredAny),
}

impl NumberOrText {
    fn to_f64(&self) -> Option<f64> {
        match self {
            NumberOrText::Number(value) => Some(*value),
            NumberOrText::Text(text) => parse_number(text),
            NumberOrText::Other(_) => None,
        }
    }
}

/// A string field that may arrive as some other JSON value.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum TextOrOther {
    Text(String),
    Other(IgnoredAny),
}

/// Parse a decimal number, ignoring surrounding whitespace.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Parse a points list such as `"5,7 100,-2"`.
///
/// Pairs are separated by whitespace and coordinates by a comma. Empty tokens
/// are skipped; a missing or malformed coordinate becomes NaN.
pub fn parse_points(text: &str) -> Vec<Point> {
    text.split_whitespace()
        .map(|pair| {
            let mut coords = pair.split(',');
            let mut next = || coords.next().and_then(parse_number).unwrap_or(f64::NAN);
            let x = next();
            let y = next();
            Point::new(x, y)
        })
        .collect()
}

pub(crate) fn nan() -> f64 {
    f64::NAN
}

/// A coordinate or length.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumberOrText::deserialize(deserializer)?;
    Ok(raw.to_f64().unwrap_or_else(|| {
        match &raw {
            NumberOrText::Text(text) => tracing::warn!("Could not parse number {:?}", text),
            _ => tracing::warn!("Expected a number or numeric string"),
        }
        f64::NAN
    }))
}

/// An optional color string. Non-string values are logged and dropped.
pub fn color<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(to_color(Option::<TextOrOther>::deserialize(deserializer)?))
}

pub(crate) fn to_color(raw: Option<TextOrOther>) -> Option<String> {
    match raw? {
        TextOrOther::Text(text) => Some(text),
        TextOrOther::Other(_) => {
            tracing::warn!("Ignoring color that is not a string");
            None
        }
    }
}

/// A string; non-string values are logged and read as empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match TextOrOther::deserialize(deserializer)? {
        TextOrOther::Text(text) => Ok(text),
        TextOrOther::Other(_) => {
            tracing::warn!("Ignoring text field that is not a string");
            Ok(String::new())
        }
    }
}

/// An optional opacity; anything that is not a non-negative number is absent.
pub fn opacity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(to_opacity(Option::<NumberOrText>::deserialize(deserializer)?))
}

pub(crate) fn to_opacity(raw: Option<NumberOrText>) -> Option<f64> {
    raw.and_then(|raw| raw.to_f64())
        .filter(|value| value.is_finite() && *value >= 0.0)
}

pub(crate) fn to_length(raw: Option<NumberOrText>) -> Option<f64> {
    raw.and_then(|raw| raw.to_f64()).filter(|value| value.is_finite())
}

/// A device dimension; must be a positive whole number.
pub fn dimension<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumberOrText::deserialize(deserializer)?;
    match raw.to_f64() {
        Some(value) if value >= 1.0 && value.fract() == 0.0 && value <= u32::MAX as f64 => {
            Ok(value as u32)
        }
        _ => Err(serde::de::Error::custom("dimension must be a positive integer")),
    }
}

/// A points list, given either as text or as an array of `[x, y]` pairs.
pub fn points<'de, D>(deserializer: D) -> Result<Vec<Point>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPoints {
        Text(String),
        Pairs(Vec<Vec<NumberOrText>>),
        Other(IgnoredAny),
    }

    let coord = |pair: &[NumberOrText], i: usize| {
        pair.get(i).and_then(NumberOrText::to_f64).unwrap_or(f64::NAN)
    };
    Ok(match RawPoints::deserialize(deserializer)? {
        RawPoints::Text(text) => parse_points(&text),
        RawPoints::Pairs(pairs) => pairs
            .iter()
            .map(|pair| Point::new(coord(pair, 0), coord(pair, 1)))
            .collect(),
        RawPoints::Other(_) => {
            tracing::warn!("Ignoring points that are neither text nor coordinate pairs");
            Vec::new()
        }
    })
}

/// The element list. Records that do not form a valid element (no `type`,
/// not an object) are logged and kept as [`Element::Unknown`] so the rest of
/// the scene still loads.
pub fn elements<'de, D>(deserializer: D) -> Result<Vec<Element>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawElement {
        Valid(Element),
        Malformed(IgnoredAny),
    }

    let raw = Option::<Vec<RawElement>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|element| match element {
            RawElement::Valid(element) => element,
            RawElement::Malformed(_) => {
                tracing::warn!("Skipping malformed scene element");
                Element::Unknown
            }
        })
        .collect())
}

/// A viewBox in its `"minX minY width height"` text form.
pub fn view_box<'de, D>(deserializer: D) -> Result<common::ViewBox, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        let points = parse_points("5,7 100,-2");
        assert_eq!(points, vec![Point::new(5.0, 7.0), Point::new(100.0, -2.0)]);

        let points = parse_points("  1,2   3,4 ");
        assert_eq!(points.len(), 2);

        assert!(parse_points("").is_empty());
    }

    #[test]
    fn test_parse_points_malformed_coordinate_is_nan() {
        let points = parse_points("1,x 2");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x, 1.0);
        assert!(points[0].y.is_nan());
        assert_eq!(points[1].x, 2.0);
        assert!(points[1].y.is_nan());
    }

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default = "nan", deserialize_with = "number")]
        x: f64,
        #[serde(default, deserialize_with = "opacity")]
        alpha: Option<f64>,
        #[serde(default, deserialize_with = "color")]
        color: Option<String>,
        #[serde(default, deserialize_with = "points")]
        points: Vec<Point>,
    }

    #[test]
    fn test_wrong_json_types_are_tolerated() {
        let record: Record = serde_json::from_str(
            r#"{"x": null, "alpha": [0.5], "color": 0, "points": [[1, "2"], [true, 3], [4]]}"#,
        )
        .unwrap();
        assert!(record.x.is_nan());
        assert_eq!(record.alpha, None);
        assert_eq!(record.color, None);
        assert_eq!(record.points.len(), 3);
        assert_eq!(record.points[0], Point::new(1.0, 2.0));
        assert!(record.points[1].x.is_nan());
        assert_eq!(record.points[1].y, 3.0);
        assert!(record.points[2].y.is_nan());

        let record: Record = serde_json::from_str(r#"{"x": {"nested": 1}, "points": 7}"#).unwrap();
        assert!(record.x.is_nan());
        assert!(record.points.is_empty());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("three"), None);
    }
}
