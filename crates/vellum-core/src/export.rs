//! Conversion into the `svg` crate's node tree.
//!
//! Hosts that already assemble documents with the [`svg`] crate can embed Vellum
//! objects as regular nodes. Sections become [`svg::node::Blob`]s carrying their
//! pre-rendered markup unchanged.
//!
//! The `svg` crate chooses its own attribute order and whitespace, so only
//! [`Document::render`](crate::draw::Render::render) produces the byte-exact
//! output; this module keeps the attribute *values* identical.
//!
//! # Example
//!
//! ```
//! use vellum_core::draw::{Circle, Object, Styled};
//!
//! let node = Object::from(Circle::new().with_fill_color("red")).to_svg_node();
//! let markup = node.to_string();
//! assert!(markup.contains(r#"fill="red""#));
//! assert!(markup.contains(r#"r="1""#));
//! ```

use svg::node::{Blob, element as svg_element};

use crate::{
    document::Document,
    draw::{Circle, Object, Polyline, Rectangle, Section, Style, Styled, Text},
};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Apply all style attributes to an `svg` crate element.
///
/// Line cap and line join are only set when present on the style.
macro_rules! apply_style {
    ($element:expr, $style:expr) => {{
        let style: &Style = $style;
        let mut elem = $element
            .set("fill", style.fill())
            .set("stroke", style.stroke())
            .set("stroke-width", style.stroke_width());

        if let Some(line_cap) = style.line_cap() {
            elem = elem.set("stroke-linecap", line_cap);
        }
        if let Some(line_join) = style.line_join() {
            elem = elem.set("stroke-linejoin", line_join);
        }

        elem
    }};
}

impl From<&Circle> for svg_element::Circle {
    fn from(circle: &Circle) -> Self {
        let elem = svg_element::Circle::new()
            .set("cx", circle.center().x())
            .set("cy", circle.center().y())
            .set("r", circle.radius());
        apply_style!(elem, circle.style())
    }
}

impl From<&Polyline> for svg_element::Polyline {
    fn from(polyline: &Polyline) -> Self {
        let points = polyline
            .points()
            .iter()
            .map(|point| format!("{},{}", point.x(), point.y()))
            .collect::<Vec<_>>()
            .join(" ");
        apply_style!(svg_element::Polyline::new(), polyline.style()).set("points", points)
    }
}

impl From<&Text> for svg_element::Text {
    fn from(text: &Text) -> Self {
        let mut elem = apply_style!(svg_element::Text::new(text.data()), text.style())
            .set("x", text.point().x())
            .set("y", text.point().y())
            .set("dx", text.offset().x())
            .set("dy", text.offset().y())
            .set("font-size", text.font_size());

        if let Some(font_family) = text.font_family() {
            elem = elem.set("font-family", font_family);
        }
        if let Some(font_weight) = text.font_weight() {
            elem = elem.set("font-weight", font_weight);
        }

        elem
    }
}

impl From<&Rectangle> for svg_element::Rectangle {
    fn from(rect: &Rectangle) -> Self {
        let elem = svg_element::Rectangle::new()
            .set("x", rect.point().x())
            .set("y", rect.point().y())
            .set("width", rect.width())
            .set("height", rect.height());
        apply_style!(elem, rect.style())
    }
}

impl From<&Section> for Blob {
    fn from(section: &Section) -> Self {
        Blob::new(section.as_str())
    }
}

impl Object {
    /// Converts this object into a boxed `svg` crate node.
    pub fn to_svg_node(&self) -> SvgNode {
        match self {
            Self::Circle(circle) => Box::new(svg_element::Circle::from(circle)),
            Self::Polyline(polyline) => Box::new(svg_element::Polyline::from(polyline)),
            Self::Text(text) => Box::new(svg_element::Text::from(text)),
            Self::Rectangle(rect) => Box::new(svg_element::Rectangle::from(rect)),
            Self::Section(section) => Box::new(Blob::from(section)),
        }
    }
}

impl Document {
    /// Converts this document into an `svg` crate document, one node per object.
    pub fn to_svg_document(&self) -> svg::Document {
        self.objects()
            .iter()
            .fold(svg::Document::new().set("version", "1.1"), |doc, object| {
                doc.add(object.to_svg_node())
            })
    }
}
