//! Color handling for Vellum shapes
//!
//! This module provides the [`Color`] type, a closed set of the four color
//! encodings a shape attribute can carry, and its canonical SVG text form.
//!
//! | Variant | Rendered as |
//! |---------|-------------|
//! | [`Color::None`] | `none` |
//! | [`Color::Named`] | the string, verbatim |
//! | [`Color::Rgb`] | `rgb(r,g,b)` |
//! | [`Color::Rgba`] | `rgba(r,g,b,a)` |
//!
//! No normalization or clamping is applied. Callers that want validated input can
//! go through [`Color::parse_css`], which uses the `color` crate's CSS parser.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};
use thiserror::Error;

/// Errors produced while interpreting CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color `{input}`: {reason}")]
    Invalid { input: String, reason: String },
}

/// An opaque color given by its three 8-bit channels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A color with three 8-bit channels and a floating-point opacity.
///
/// The alpha is conceptually in `[0, 1]` but is never validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(0, 0, 0, 1.0)
    }
}

/// A paint value for fill and stroke attributes.
///
/// # Examples
///
/// ```
/// use vellum_core::color::{Color, Rgb, Rgba};
///
/// assert_eq!(Color::default().to_string(), "none");
/// assert_eq!(Color::from("red").to_string(), "red");
/// assert_eq!(Color::from(Rgb::new(10, 20, 30)).to_string(), "rgb(10,20,30)");
/// assert_eq!(Color::from(Rgba::new(1, 2, 3, 0.52)).to_string(), "rgba(1,2,3,0.52)");
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Color {
    /// No paint (default)
    #[default]
    None,
    /// A color name or any other string, rendered verbatim
    Named(String),
    Rgb(Rgb),
    Rgba(Rgba),
}

impl Color {
    /// The empty color, rendered as `none`.
    pub const NONE: Color = Color::None;

    /// Parses a CSS color string into an [`Rgb`] or [`Rgba`] color.
    ///
    /// Fully opaque colors become [`Color::Rgb`]; anything translucent becomes
    /// [`Color::Rgba`] with its alpha rounded to three decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Invalid`] if the string is not a CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::color::{Color, Rgb, Rgba};
    ///
    /// assert_eq!(Color::parse_css("#ff8000").unwrap(), Color::Rgb(Rgb::new(255, 128, 0)));
    /// assert_eq!(
    ///     Color::parse_css("rgba(1, 2, 3, 0.5)").unwrap(),
    ///     Color::Rgba(Rgba::new(1, 2, 3, 0.5))
    /// );
    /// assert!(Color::parse_css("not-a-color").is_err());
    /// ```
    pub fn parse_css(input: &str) -> Result<Self, ColorError> {
        let parsed = DynamicColor::from_str(input).map_err(|err| ColorError::Invalid {
            input: input.to_string(),
            reason: err.to_string(),
        })?;

        let alpha = (f64::from(parsed.components[3]) * 1000.0).round() / 1000.0;
        let channels = parsed.to_alpha_color::<Srgb>().to_rgba8();

        if alpha >= 1.0 {
            Ok(Self::Rgb(Rgb::new(channels.r, channels.g, channels.b)))
        } else {
            Ok(Self::Rgba(Rgba::new(channels.r, channels.g, channels.b, alpha)))
        }
    }

    /// Returns `true` if a renderer would understand this color.
    ///
    /// Channel colors are always valid. Named colors are checked against the CSS
    /// color grammar, with the SVG keyword `none` accepted as well.
    pub fn is_css_valid(&self) -> bool {
        match self {
            Self::None | Self::Rgb(_) | Self::Rgba(_) => true,
            Self::Named(name) => {
                name.eq_ignore_ascii_case("none") || DynamicColor::from_str(name).is_ok()
            }
        }
    }

    /// Returns `true` for [`Color::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Named(name) => f.write_str(name),
            Self::Rgb(rgb) => write!(f, "rgb({},{},{})", rgb.red, rgb.green, rgb.blue),
            Self::Rgba(rgba) => write!(
                f,
                "rgba({},{},{},{})",
                rgba.red, rgba.green, rgba.blue, rgba.alpha
            ),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Self::Rgba(rgba)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_default_is_none() {
        assert_eq!(Color::default(), Color::NONE);
        assert!(Color::default().is_none());
        assert_eq!(Color::default().to_string(), "none");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::None.to_string(), "none");
        assert_eq!(Color::from("red").to_string(), "red");
        assert_eq!(Color::from(Rgb::new(10, 20, 30)).to_string(), "rgb(10,20,30)");
        assert_eq!(
            Color::from(Rgba::new(1, 2, 3, 0.52)).to_string(),
            "rgba(1,2,3,0.52)"
        );
    }

    #[test]
    fn test_color_display_is_verbatim() {
        // Named colors are never escaped or validated
        assert_eq!(Color::from("not <a> color").to_string(), "not <a> color");
        assert_eq!(Color::from(String::new()).to_string(), "");
        assert_eq!(Color::from(Rgba::new(0, 0, 0, 1.0)).to_string(), "rgba(0,0,0,1)");
        assert_eq!(Color::from(Rgba::new(255, 0, 9, -3.5)).to_string(), "rgba(255,0,9,-3.5)");
    }

    #[test]
    fn test_color_parse_css() {
        assert_eq!(
            Color::parse_css("blue").unwrap(),
            Color::Rgb(Rgb::new(0, 0, 255))
        );
        assert_eq!(
            Color::parse_css("#00000000").unwrap(),
            Color::Rgba(Rgba::new(0, 0, 0, 0.0))
        );

        let err = Color::parse_css("definitely-not").unwrap_err();
        assert!(err.to_string().contains("invalid color `definitely-not`"));
    }

    #[test]
    fn test_color_is_css_valid() {
        assert!(Color::None.is_css_valid());
        assert!(Color::from("none").is_css_valid());
        assert!(Color::from("purple").is_css_valid());
        assert!(Color::from(Rgb::new(1, 2, 3)).is_css_valid());
        assert!(!Color::from("pinkish").is_css_valid());
    }

    #[test]
    fn test_color_to_svg_value() {
        let value = svg::node::Value::from(&Color::from(Rgb::new(1, 2, 3)));
        assert_eq!(value.to_string(), "rgb(1,2,3)");
    }
}
