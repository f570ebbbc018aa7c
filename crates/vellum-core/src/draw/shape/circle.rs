use std::fmt;

use crate::{
    draw::{Render, Style, display_via_render},
    geometry::Point,
};

/// A circle given by its center and radius.
///
/// Renders as
/// `<circle fill=".." stroke=".." stroke-width=".." [..] cx=".." cy=".." r=".."/>`.
///
/// # Examples
///
/// ```
/// # use vellum_core::draw::{Circle, Styled};
/// # use vellum_core::geometry::Point;
/// let circle = Circle::new()
///     .with_center(Point::new(3.005, 12.1))
///     .with_radius(4.0)
///     .with_fill_color("red");
/// assert_eq!(
///     circle.to_string(),
///     r#"<circle fill="red" stroke="none" stroke-width="1" cx="3.005" cy="12.1" r="4"/>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    style: Style,
    center: Point,
    radius: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            style: Style::default(),
            center: Point::default(),
            radius: 1.0,
        }
    }
}

impl Circle {
    /// Creates a unit circle at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Sets the radius. Negative values are kept as-is.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn with_center(mut self, center: Point) -> Self {
        self.set_center(center);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.set_radius(radius);
        self
    }
}

super::impl_styled!(Circle);

impl Render for Circle {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<circle ")?;
        self.style.render(out)?;
        write!(
            out,
            r#" cx="{}" cy="{}" r="{}"/>"#,
            self.center.x(),
            self.center.y(),
            self.radius
        )
    }
}

display_via_render!(Circle);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Styled;

    #[test]
    fn test_circle_default() {
        assert_eq!(
            Circle::new().to_string(),
            r#"<circle fill="none" stroke="none" stroke-width="1" cx="0" cy="0" r="1"/>"#
        );
    }

    #[test]
    fn test_circle_single_setters() {
        let cases = [
            (
                "fill-color",
                Circle::new().with_fill_color("red"),
                r#"<circle fill="red" stroke="none" stroke-width="1" cx="0" cy="0" r="1"/>"#,
            ),
            (
                "stroke-color",
                Circle::new().with_stroke_color("blue"),
                r#"<circle fill="none" stroke="blue" stroke-width="1" cx="0" cy="0" r="1"/>"#,
            ),
            (
                "stroke-width",
                Circle::new().with_stroke_width(4.5),
                r#"<circle fill="none" stroke="none" stroke-width="4.5" cx="0" cy="0" r="1"/>"#,
            ),
            (
                "stroke-linecap",
                Circle::new().with_stroke_line_cap("default"),
                r#"<circle fill="none" stroke="none" stroke-width="1" stroke-linecap="default" cx="0" cy="0" r="1"/>"#,
            ),
            (
                "stroke-linejoin",
                Circle::new().with_stroke_line_join("not-default"),
                r#"<circle fill="none" stroke="none" stroke-width="1" stroke-linejoin="not-default" cx="0" cy="0" r="1"/>"#,
            ),
            (
                "center",
                Circle::new().with_center(Point::new(3.005, 12.1)),
                r#"<circle fill="none" stroke="none" stroke-width="1" cx="3.005" cy="12.1" r="1"/>"#,
            ),
            (
                "radius",
                Circle::new().with_radius(18.1284),
                r#"<circle fill="none" stroke="none" stroke-width="1" cx="0" cy="0" r="18.1284"/>"#,
            ),
        ];

        for (name, circle, want) in cases {
            assert_eq!(circle.to_string(), want, "{name}");
        }
    }

    #[test]
    fn test_circle_all_setters_in_any_order() {
        let circle = Circle::new()
            .with_stroke_line_cap("some linecap")
            .with_stroke_color("purple")
            .with_center(Point::new(-13.0, -24.0))
            .with_stroke_width(-5.0)
            .with_stroke_line_join("some linejoin")
            .with_radius(4.0)
            .with_fill_color("pink");

        assert_eq!(
            circle.to_string(),
            r#"<circle fill="pink" stroke="purple" stroke-width="-5" stroke-linecap="some linecap" stroke-linejoin="some linejoin" cx="-13" cy="-24" r="4"/>"#
        );
    }

    #[test]
    fn test_circle_in_place_setters() {
        let mut circle = Circle::new();
        circle.set_center(Point::new(1.5, 2.5));
        circle.set_radius(-2.0);
        circle.set_fill_color("red");

        assert_eq!(circle.center(), Point::new(1.5, 2.5));
        assert_eq!(circle.radius(), -2.0);
        assert_eq!(circle.style().fill().to_string(), "red");
    }
}
