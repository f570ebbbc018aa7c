//! Geometric primitives for shape placement.
//!
//! Vellum uses the SVG user coordinate system: origin at the top-left, X growing
//! rightward and Y growing downward. No transforms are applied anywhere; every
//! coordinate is written out exactly as given.

use serde::Deserialize;

/// A 2D point in SVG user space.
///
/// # Examples
///
/// ```
/// # use vellum_core::geometry::Point;
/// let p = Point::new(3.005, 12.1);
/// assert_eq!(p.x(), 3.005);
/// assert_eq!(p.y(), 12.1);
/// assert_eq!(Point::default(), Point::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default_is_origin() {
        let p = Point::default();
        assert_eq!(p.x(), 0.0);
        assert_eq!(p.y(), 0.0);
    }

    #[test]
    fn test_point_with_coordinates() {
        let p = Point::new(1.0, 2.0).with_x(-4.5).with_y(7.25);
        assert_eq!(p, Point::new(-4.5, 7.25));
        assert_eq!(Point::from((-4.5, 7.25)), p);
    }

    #[test]
    fn test_point_deserialize_rejects_unknown_fields() {
        let value = serde::de::value::MapDeserializer::<_, serde::de::value::Error>::new(
            [("x", 1.5), ("z", 2.0)].into_iter(),
        );
        let err = Point::deserialize(value).unwrap_err();
        assert!(err.to_string().contains("unknown field `z`"));
    }
}
