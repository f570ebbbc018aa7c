use std::fmt;

use crate::{
    draw::{Render, Style, display_via_render},
    geometry::Point,
};

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// Unlike the other shapes, a rectangle writes its geometry (`x`, `y`, `width`,
/// `height`) before the style attributes and closes with ` />`. Existing
/// consumers compare this output byte for byte, so the order is fixed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rectangle {
    point: Point,
    width: f64,
    height: f64,
    style: Style,
}

impl Rectangle {
    /// Creates an empty rectangle at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the top-left corner.
    pub fn point(&self) -> Point {
        self.point
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_point(&mut self, point: Point) {
        self.point = point;
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn with_point(mut self, point: Point) -> Self {
        self.set_point(point);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.set_width(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.set_height(height);
        self
    }
}

super::impl_styled!(Rectangle);

impl Render for Rectangle {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" "#,
            self.point.x(),
            self.point.y(),
            self.width,
            self.height
        )?;
        self.style.render(out)?;
        out.write_str(" />")
    }
}

display_via_render!(Rectangle);
