use std::fmt;

use crate::{
    draw::{Render, Style, display_via_render},
    geometry::Point,
};

/// An open line through an ordered list of points.
///
/// Points are written as `x,y` pairs separated by single spaces, with no
/// trailing separator; a polyline without points renders `points=""`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    style: Style,
    points: Vec<Point>,
}

impl Polyline {
    /// Creates an empty polyline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Appends a vertex.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn with_point(mut self, point: Point) -> Self {
        self.add_point(point);
        self
    }

    /// Appends every vertex from `points`, in order.
    pub fn with_points(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.points.extend(points);
        self
    }
}

super::impl_styled!(Polyline);

impl Render for Polyline {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<polyline ")?;
        self.style.render(out)?;
        out.write_str(r#" points=""#)?;
        for (idx, point) in self.points.iter().enumerate() {
            if idx > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{},{}", point.x(), point.y())?;
        }
        out.write_str(r#""/>"#)
    }
}

display_via_render!(Polyline);
