//! Color representation and parsing.

use crate::error::{RasterError, RasterResult};
use std::fmt;
use std::str::FromStr;

/// RGB color with 8-bit components.
///
/// The rasterizer keeps every touched pixel opaque, so colors carry no alpha
/// channel of their own; opacity is supplied separately per element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse color from hex string (e.g., "#ff0000", "#f00").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse the functional form `rgb(r, g, b)`.
    ///
    /// Channels are decimal integers separated by commas, with any amount of
    /// whitespace around them. Values above 255 saturate.
    pub fn from_rgb_function(text: &str) -> Option<Self> {
        let inner = text
            .trim()
            .strip_prefix("rgb")?
            .trim_start()
            .strip_prefix('(')?
            .strip_suffix(')')?;

        let mut channels = inner.split(',').map(|channel| {
            let channel = channel.trim();
            if channel.is_empty() || !channel.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            // Digit-only text only fails to parse on overflow.
            Some(channel.parse::<u32>().map_or(255, |v| v.min(255) as u8))
        });

        let r = channels.next()??;
        let g = channels.next()??;
        let b = channels.next()??;
        if channels.next().is_some() {
            return None;
        }

        Some(Self::rgb(r, g, b))
    }

    /// Blend this color over `background` with the given opacity.
    ///
    /// Each channel is `alpha * fg + (1 - alpha) * bg`, rounded half-up and
    /// clamped to `[0, 255]`.
    pub fn blend_over(&self, background: Color, alpha: f64) -> Color {
        let blend = |fg: u8, bg: u8| -> u8 {
            let out = alpha * fg as f64 + (1.0 - alpha) * bg as f64;
            if out.is_nan() {
                return bg;
            }
            (out + 0.5).floor().clamp(0.0, 255.0) as u8
        };

        Color::rgb(
            blend(self.r, background.r),
            blend(self.g, background.g),
            blend(self.b, background.b),
        )
    }
}

impl FromStr for Color {
    type Err = RasterError;

    fn from_str(s: &str) -> RasterResult<Self> {
        let text = s.trim();
        let parsed = if text.starts_with('#') {
            Self::from_hex(text)
        } else {
            Self::from_rgb_function(text)
        };
        parsed.ok_or_else(|| RasterError::parse(format!("Could not parse color string {:?}", s)))
    }
}

/// Parse an optional color attribute.
///
/// Absent or empty text is black. Malformed text is logged and also yields
/// black; it never aborts a render.
pub fn parse_color(text: Option<&str>) -> Color {
    match text.map(str::trim) {
        None | Some("") => Color::BLACK,
        Some(text) => text.parse().unwrap_or_else(|err: RasterError| {
            tracing::warn!("{}", err);
            Color::BLACK
        }),
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
