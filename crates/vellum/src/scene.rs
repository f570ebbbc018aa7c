//! Declarative scene descriptions.
//!
//! A [`Scene`] is a TOML document that lists objects in drawing order. It is
//! elaborated into a [`Document`] by building each shape and flattening every
//! `section` through a [`SectionBuilder`].
//!
//! # Format
//!
//! ```toml
//! [[objects]]
//! kind = "circle"
//! center = { x = 10, y = 20 }
//! radius = 5
//! fill = "red"                                   # named color
//! stroke = { red = 1, green = 2, blue = 3 }      # rgb
//!
//! [[objects]]
//! kind = "section"
//!
//! [[objects.objects]]
//! kind = "text"
//! data = "inside a section"
//! fill = { red = 0, green = 0, blue = 0, alpha = 0.5 }   # rgba
//! ```
//!
//! Object kinds are `circle`, `polyline`, `text`, `rect` and `section`. Every
//! shape accepts the style fields `fill`, `stroke`, `stroke_width`,
//! `stroke_linecap` and `stroke_linejoin`. Style fields left out fall back to
//! the configured default style, then to the shape defaults.
//!
//! Keys that none of the above recognise are rejected, so a misspelled field
//! fails to parse instead of silently falling back to a default.

use std::collections::BTreeMap;

use log::{debug, trace};
use serde::{
    Deserialize, Deserializer,
    de::{self, IgnoredAny},
};

use vellum_core::{
    color::{Color, Rgb, Rgba},
    document::Document,
    draw::{
        Circle, Object, Polyline, Rectangle, SectionBuilder, StrokeCap, StrokeJoin, Style, Styled,
        Text,
    },
    geometry::Point,
};

use crate::{config::AppConfig, error::VellumError};

/// A color as written in a scene or config file.
///
/// A string is a named color; a table with `red`, `green`, `blue` (and
/// optionally `alpha`) is a channel color.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum ColorSpec {
    Named(String),
    Rgba {
        red: u8,
        green: u8,
        blue: u8,
        alpha: f64,
    },
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
    },
}

impl From<&ColorSpec> for Color {
    fn from(spec: &ColorSpec) -> Self {
        match spec {
            ColorSpec::Named(name) => Color::from(name.as_str()),
            ColorSpec::Rgba {
                red,
                green,
                blue,
                alpha,
            } => Color::from(Rgba::new(*red, *green, *blue, *alpha)),
            ColorSpec::Rgb { red, green, blue } => Color::from(Rgb::new(*red, *green, *blue)),
        }
    }
}

/// Style fields of a scene shape, each optional.
///
/// Also used as the `[style]` section of the configuration file, where it
/// provides fallbacks for shapes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSpec {
    #[serde(default)]
    fill: Option<ColorSpec>,
    #[serde(default)]
    stroke: Option<ColorSpec>,
    #[serde(default)]
    stroke_width: Option<f64>,
    #[serde(default)]
    stroke_linecap: Option<String>,
    #[serde(default)]
    stroke_linejoin: Option<String>,
}

impl StyleSpec {
    pub fn fill(&self) -> Option<&ColorSpec> {
        self.fill.as_ref()
    }

    pub fn stroke(&self) -> Option<&ColorSpec> {
        self.stroke.as_ref()
    }

    pub fn stroke_width(&self) -> Option<f64> {
        self.stroke_width
    }

    /// Returns a spec where every unset field is taken from `fallback`.
    pub fn or(&self, fallback: &StyleSpec) -> StyleSpec {
        StyleSpec {
            fill: self.fill.clone().or_else(|| fallback.fill.clone()),
            stroke: self.stroke.clone().or_else(|| fallback.stroke.clone()),
            stroke_width: self.stroke_width.or(fallback.stroke_width),
            stroke_linecap: self
                .stroke_linecap
                .clone()
                .or_else(|| fallback.stroke_linecap.clone()),
            stroke_linejoin: self
                .stroke_linejoin
                .clone()
                .or_else(|| fallback.stroke_linejoin.clone()),
        }
    }

    /// Builds a [`Style`], starting from the model defaults.
    ///
    /// # Errors
    ///
    /// With `strict`, returns [`VellumError::Color`] for a named color that is not
    /// a CSS color and [`VellumError::Scene`] for an unknown line cap or
    /// line join keyword.
    pub fn to_style(&self, strict: bool) -> Result<Style, VellumError> {
        let mut style = Style::new();
        if let Some(fill) = &self.fill {
            style.set_fill(check_color(fill, strict)?);
        }
        if let Some(stroke) = &self.stroke {
            style.set_stroke(check_color(stroke, strict)?);
        }
        if let Some(width) = self.stroke_width {
            style.set_stroke_width(width);
        }
        if let Some(line_cap) = &self.stroke_linecap {
            if strict {
                line_cap.parse::<StrokeCap>().map_err(VellumError::Scene)?;
            }
            style.set_line_cap(line_cap.clone());
        }
        if let Some(line_join) = &self.stroke_linejoin {
            if strict {
                line_join.parse::<StrokeJoin>().map_err(VellumError::Scene)?;
            }
            style.set_line_join(line_join.clone());
        }
        Ok(style)
    }
}

fn check_color(spec: &ColorSpec, strict: bool) -> Result<Color, VellumError> {
    let color = Color::from(spec);
    if strict && !color.is_css_valid() {
        if let Color::Named(name) = &color {
            // Surfaces the CSS parser's reason for rejecting the name
            Color::parse_css(name)?;
        }
    }
    Ok(color)
}

/// The keys of an object table left over after every known field is taken.
///
/// Flattened last into each [`SceneObject`] variant, where `deny_unknown_fields`
/// is unavailable because the style fields are flattened too. Deserializing
/// fails if anything is left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoUnknownFields;

impl<'de> Deserialize<'de> for NoUnknownFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rest = BTreeMap::<String, IgnoredAny>::deserialize(deserializer)?;
        if rest.is_empty() {
            return Ok(Self);
        }

        let keys = rest
            .keys()
            .map(|key| format!("`{key}`"))
            .collect::<Vec<_>>()
            .join(", ");
        Err(de::Error::custom(format_args!("unknown field {keys}")))
    }
}

/// One entry of a scene, tagged by its `kind` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SceneObject {
    Circle {
        #[serde(flatten)]
        style: StyleSpec,
        #[serde(default)]
        center: Option<Point>,
        #[serde(default)]
        radius: Option<f64>,
        #[serde(flatten)]
        unknown: NoUnknownFields,
    },
    Polyline {
        #[serde(flatten)]
        style: StyleSpec,
        #[serde(default)]
        points: Vec<Point>,
        #[serde(flatten)]
        unknown: NoUnknownFields,
    },
    Text {
        #[serde(flatten)]
        style: StyleSpec,
        #[serde(default)]
        point: Option<Point>,
        #[serde(default)]
        offset: Option<Point>,
        #[serde(default)]
        font_size: Option<u32>,
        #[serde(default)]
        font_family: Option<String>,
        #[serde(default)]
        font_weight: Option<String>,
        #[serde(default)]
        data: Option<String>,
        #[serde(flatten)]
        unknown: NoUnknownFields,
    },
    #[serde(rename = "rect", alias = "rectangle")]
    Rectangle {
        #[serde(flatten)]
        style: StyleSpec,
        #[serde(default)]
        point: Option<Point>,
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
        #[serde(flatten)]
        unknown: NoUnknownFields,
    },
    Section {
        #[serde(default)]
        objects: Vec<SceneObject>,
        #[serde(flatten)]
        unknown: NoUnknownFields,
    },
}

/// A parsed scene, ready to be elaborated into a [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default)]
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Parses a scene from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::Parse`] carrying the source for syntax errors,
    /// unknown object kinds and unknown fields.
    pub fn from_toml(src: &str) -> Result<Self, VellumError> {
        let scene: Scene =
            toml::from_str(src).map_err(|err| VellumError::new_parse_error(err, src))?;
        debug!(objects = scene.objects.len(); "Scene parsed");
        Ok(scene)
    }

    /// Returns the top-level objects in drawing order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Builds a [`Document`] from this scene.
    ///
    /// # Errors
    ///
    /// Returns an error only when `render.strict` is enabled and a named
    /// color or a line keyword is not recognised.
    pub fn elaborate(&self, config: &AppConfig) -> Result<Document, VellumError> {
        let elaborator = Elaborator {
            defaults: config.style(),
            strict: config.render().strict(),
        };

        let mut doc = Document::new();
        for object in &self.objects {
            doc.add(elaborator.object(object)?);
        }
        Ok(doc)
    }
}

struct Elaborator<'a> {
    defaults: &'a StyleSpec,
    strict: bool,
}

impl Elaborator<'_> {
    fn style(&self, spec: &StyleSpec) -> Result<Style, VellumError> {
        spec.or(self.defaults).to_style(self.strict)
    }

    fn object(&self, object: &SceneObject) -> Result<Object, VellumError> {
        let object = match object {
            SceneObject::Circle {
                style,
                center,
                radius,
                ..
            } => {
                let mut circle = Circle::new().with_style(self.style(style)?);
                if let Some(center) = center {
                    circle.set_center(*center);
                }
                if let Some(radius) = radius {
                    circle.set_radius(*radius);
                }
                Object::from(circle)
            }
            SceneObject::Polyline { style, points, .. } => Object::from(
                Polyline::new()
                    .with_style(self.style(style)?)
                    .with_points(points.iter().copied()),
            ),
            SceneObject::Text {
                style,
                point,
                offset,
                font_size,
                font_family,
                font_weight,
                data,
                ..
            } => {
                let mut text = Text::new().with_style(self.style(style)?);
                if let Some(point) = point {
                    text.set_point(*point);
                }
                if let Some(offset) = offset {
                    text.set_offset(*offset);
                }
                if let Some(font_size) = font_size {
                    text.set_font_size(*font_size);
                }
                if let Some(font_family) = font_family {
                    text.set_font_family(font_family.as_str());
                }
                if let Some(font_weight) = font_weight {
                    text.set_font_weight(font_weight.as_str());
                }
                if let Some(data) = data {
                    text.set_data(data.as_str());
                }
                Object::from(text)
            }
            SceneObject::Rectangle {
                style,
                point,
                width,
                height,
                ..
            } => {
                let mut rect = Rectangle::new().with_style(self.style(style)?);
                if let Some(point) = point {
                    rect.set_point(*point);
                }
                if let Some(width) = width {
                    rect.set_width(*width);
                }
                if let Some(height) = height {
                    rect.set_height(*height);
                }
                Object::from(rect)
            }
            SceneObject::Section { objects, .. } => {
                let mut builder = SectionBuilder::new();
                for child in objects {
                    builder.add(self.object(child)?);
                }
                Object::from(builder.build())
            }
        };

        trace!(kind = object.kind(); "Elaborated scene object");
        Ok(object)
    }
}
