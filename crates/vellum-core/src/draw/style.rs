//! Fill and stroke attributes shared by every shape.
//!
//! # Overview
//!
//! Exported types:
//! - [`Style`]: The style bundle (fill, stroke, width, line cap, line join)
//! - [`Styled`]: Trait giving every shape the same `set_*` and `with_*` mutators
//! - [`StrokeCap`]: Typed `stroke-linecap` keywords
//! - [`StrokeJoin`]: Typed `stroke-linejoin` keywords
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Default | Emitted |
//! |--------------|---------------|---------|---------|
//! | `fill` | `fill` | `none` | always |
//! | `stroke` | `stroke` | `none` | always |
//! | `stroke_width` | `stroke-width` | `1` | always |
//! | `line_cap` | `stroke-linecap` | unset | only when set |
//! | `line_join` | `stroke-linejoin` | unset | only when set |
//!
//! Line cap and line join are free-form strings. The [`StrokeCap`] and
//! [`StrokeJoin`] enums convert into them for callers that prefer the SVG keywords.
//!
//! ```
//! use vellum_core::draw::{Circle, StrokeCap, Styled};
//!
//! let circle = Circle::new()
//!     .with_fill_color("pink")
//!     .with_stroke_width(2.5)
//!     .with_stroke_line_cap(StrokeCap::Round)
//!     .with_stroke_line_join("some linejoin");
//! assert_eq!(circle.style().line_cap(), Some("round"));
//! ```

use std::{fmt, str::FromStr};

use crate::color::Color;

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

impl From<StrokeCap> for String {
    fn from(cap: StrokeCap) -> Self {
        cap.to_svg_value().to_string()
    }
}

/// Defines how line corners (joins) are rendered.
///
/// Maps directly to SVG `stroke-linejoin` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    #[default]
    Miter,
    /// Miter clipped at the miter limit instead of falling back to bevel
    MiterClip,
    /// Rounded corner
    Round,
    /// Beveled (cut-off) corner
    Bevel,
    /// Arcs extending the outer edges until they meet
    Arcs,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::MiterClip => "miter-clip",
            Self::Round => "round",
            Self::Bevel => "bevel",
            Self::Arcs => "arcs",
        }
    }
}

impl FromStr for StrokeJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "miter-clip" => Ok(Self::MiterClip),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            "arcs" => Ok(Self::Arcs),
            _ => Err(format!(
                "invalid stroke join `{s}`, valid values: miter, miter-clip, round, bevel, arcs"
            )),
        }
    }
}

impl From<StrokeJoin> for String {
    fn from(join: StrokeJoin) -> Self {
        join.to_svg_value().to_string()
    }
}

/// The style bundle carried by every shape.
///
/// No value is validated: negative widths and arbitrary strings are rendered
/// as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    fill: Color,
    stroke: Color,
    stroke_width: f64,
    line_cap: Option<String>,
    line_join: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::NONE,
            stroke: Color::NONE,
            stroke_width: 1.0,
            line_cap: None,
            line_join: None,
        }
    }
}

impl Style {
    /// Creates a style with all defaults: no fill, no stroke, width 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fill color.
    pub fn fill(&self) -> &Color {
        &self.fill
    }

    /// Returns the stroke color.
    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    /// Returns the stroke width.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Returns the stroke line cap, if set.
    pub fn line_cap(&self) -> Option<&str> {
        self.line_cap.as_deref()
    }

    /// Returns the stroke line join, if set.
    pub fn line_join(&self) -> Option<&str> {
        self.line_join.as_deref()
    }

    /// Sets the fill color.
    pub fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    /// Sets the stroke color.
    pub fn set_stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    /// Sets the stroke width.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    /// Sets the stroke line cap.
    pub fn set_line_cap(&mut self, line_cap: String) {
        self.line_cap = Some(line_cap);
    }

    /// Sets the stroke line join.
    pub fn set_line_join(&mut self, line_join: String) {
        self.line_join = Some(line_join);
    }

    /// Writes the style attributes without leading or trailing whitespace.
    ///
    /// Optional attributes are each prefixed by a single space and skipped
    /// entirely when unset.
    pub(crate) fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            r#"fill="{}" stroke="{}" stroke-width="{}""#,
            self.fill, self.stroke, self.stroke_width
        )?;
        if let Some(line_cap) = &self.line_cap {
            write!(out, r#" stroke-linecap="{line_cap}""#)?;
        }
        if let Some(line_join) = &self.line_join {
            write!(out, r#" stroke-linejoin="{line_join}""#)?;
        }
        Ok(())
    }
}

/// Shared style mutators for all shapes.
///
/// Implementors only expose their [`Style`]; the `set_*` methods mutate in place
/// and the `with_*` methods consume and return the shape for call chaining.
pub trait Styled {
    /// Returns the style bundle.
    fn style(&self) -> &Style;

    /// Returns the style bundle for mutation.
    fn style_mut(&mut self) -> &mut Style;

    fn set_fill_color(&mut self, color: impl Into<Color>) {
        self.style_mut().set_fill(color.into());
    }

    fn set_stroke_color(&mut self, color: impl Into<Color>) {
        self.style_mut().set_stroke(color.into());
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.style_mut().set_stroke_width(width);
    }

    fn set_stroke_line_cap(&mut self, line_cap: impl Into<String>) {
        self.style_mut().set_line_cap(line_cap.into());
    }

    fn set_stroke_line_join(&mut self, line_join: impl Into<String>) {
        self.style_mut().set_line_join(line_join.into());
    }

    /// Replaces the whole style bundle.
    fn set_style(&mut self, style: Style) {
        *self.style_mut() = style;
    }

    fn with_fill_color(mut self, color: impl Into<Color>) -> Self
    where
        Self: Sized,
    {
        self.set_fill_color(color);
        self
    }

    fn with_stroke_color(mut self, color: impl Into<Color>) -> Self
    where
        Self: Sized,
    {
        self.set_stroke_color(color);
        self
    }

    fn with_stroke_width(mut self, width: f64) -> Self
    where
        Self: Sized,
    {
        self.set_stroke_width(width);
        self
    }

    fn with_stroke_line_cap(mut self, line_cap: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.set_stroke_line_cap(line_cap);
        self
    }

    fn with_stroke_line_join(mut self, line_join: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.set_stroke_line_join(line_join);
        self
    }

    fn with_style(mut self, style: Style) -> Self
    where
        Self: Sized,
    {
        self.set_style(style);
        self
    }
}
