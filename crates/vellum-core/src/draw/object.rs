//! The closed union of everything a document or section can hold.

use std::fmt;

use crate::draw::{
    Circle, Polyline, Rectangle, Render, Section, Text, display_via_render,
};

/// Any drawable unit: one of the four shapes or a pre-rendered [`Section`].
///
/// Containers store `Object`s so a single ordered collection can mix kinds.
/// Every shape converts into an `Object` with [`From`], so container methods
/// accept `impl Into<Object>`.
///
/// # Examples
///
/// ```
/// # use vellum_core::draw::{Circle, Object, Polyline};
/// let objects: Vec<Object> = vec![Circle::new().into(), Polyline::new().into()];
/// assert_eq!(objects[0].kind(), "circle");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
    Rectangle(Rectangle),
    Section(Section),
}

impl Object {
    /// Returns a short name for the object's kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Polyline(_) => "polyline",
            Self::Text(_) => "text",
            Self::Rectangle(_) => "rect",
            Self::Section(_) => "section",
        }
    }
}

impl Render for Object {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        match self {
            Self::Circle(circle) => circle.render(out),
            Self::Polyline(polyline) => polyline.render(out),
            Self::Text(text) => text.render(out),
            Self::Rectangle(rect) => rect.render(out),
            Self::Section(section) => section.render(out),
        }
    }
}

display_via_render!(Object);

impl From<Circle> for Object {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Polyline> for Object {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}

impl From<Text> for Object {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Rectangle> for Object {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Section> for Object {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}
