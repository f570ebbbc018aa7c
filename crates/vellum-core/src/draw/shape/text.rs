use std::fmt;

use crate::{
    draw::{Render, Style, display_via_render},
    geometry::Point,
};

/// A run of text anchored at a point.
///
/// The body text is written between the opening and closing tags as given,
/// without escaping. `font-family` and `font-weight` are written after
/// `font-size`, and only when set.
///
/// # Examples
///
/// ```
/// # use vellum_core::draw::Text;
/// # use vellum_core::geometry::Point;
/// let text = Text::new()
///     .with_point(Point::new(10.0, 20.0))
///     .with_font_size(14)
///     .with_font_weight("bold")
///     .with_data("Hello");
/// assert_eq!(
///     text.to_string(),
///     concat!(
///         r#"<text fill="none" stroke="none" stroke-width="1" x="10" y="20" dx="0" dy="0" "#,
///         r#"font-size="14" font-weight="bold">Hello</text>"#,
///     )
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    style: Style,
    point: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    data: String,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            style: Style::default(),
            point: Point::default(),
            offset: Point::default(),
            font_size: 1,
            font_family: None,
            font_weight: None,
            data: String::new(),
        }
    }
}

impl Text {
    /// Creates empty text at the origin with font size 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the anchor point (`x`, `y`).
    pub fn point(&self) -> Point {
        self.point
    }

    /// Returns the offset from the anchor (`dx`, `dy`).
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_weight(&self) -> Option<&str> {
        self.font_weight.as_deref()
    }

    /// Returns the body text.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn set_point(&mut self, point: Point) {
        self.point = point;
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn set_font_size(&mut self, font_size: u32) {
        self.font_size = font_size;
    }

    pub fn set_font_family(&mut self, font_family: impl Into<String>) {
        self.font_family = Some(font_family.into());
    }

    pub fn set_font_weight(&mut self, font_weight: impl Into<String>) {
        self.font_weight = Some(font_weight.into());
    }

    pub fn set_data(&mut self, data: impl Into<String>) {
        self.data = data.into();
    }

    pub fn with_point(mut self, point: Point) -> Self {
        self.set_point(point);
        self
    }

    pub fn with_offset(mut self, offset: Point) -> Self {
        self.set_offset(offset);
        self
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.set_font_size(font_size);
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.set_font_family(font_family);
        self
    }

    pub fn with_font_weight(mut self, font_weight: impl Into<String>) -> Self {
        self.set_font_weight(font_weight);
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.set_data(data);
        self
    }
}

super::impl_styled!(Text);

impl Render for Text {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<text ")?;
        self.style.render(out)?;
        write!(
            out,
            r#" x="{}" y="{}" dx="{}" dy="{}" font-size="{}""#,
            self.point.x(),
            self.point.y(),
            self.offset.x(),
            self.offset.y(),
            self.font_size
        )?;
        if let Some(font_family) = &self.font_family {
            write!(out, r#" font-family="{font_family}""#)?;
        }
        if let Some(font_weight) = &self.font_weight {
            write!(out, r#" font-weight="{font_weight}""#)?;
        }
        write!(out, ">{}</text>", self.data)
    }
}

display_via_render!(Text);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::{Rgb, Rgba},
        draw::Styled,
    };

    const DEFAULT_TEXT: &str = r#"<text fill="none" stroke="none" stroke-width="1" x="0" y="0" dx="0" dy="0" font-size="1"></text>"#;

    #[test]
    fn test_text_default() {
        assert_eq!(Text::new().to_string(), DEFAULT_TEXT);
    }

    #[test]
    fn test_text_single_setters() {
        let cases = [
            (
                "fill-color",
                Text::new().with_fill_color(Rgba::new(1, 2, 3, 0.52)),
                r#"<text fill="rgba(1,2,3,0.52)" stroke="none" stroke-width="1" x="0" y="0" dx="0" dy="0" font-size="1"></text>"#,
            ),
            (
                "stroke-linecap",
                Text::new().with_stroke_line_cap("linecap1"),
                r#"<text fill="none" stroke="none" stroke-width="1" stroke-linecap="linecap1" x="0" y="0" dx="0" dy="0" font-size="1"></text>"#,
            ),
            (
                "point",
                Text::new().with_point(Point::new(3.005, 12.1)),
                r#"<text fill="none" stroke="none" stroke-width="1" x="3.005" y="12.1" dx="0" dy="0" font-size="1"></text>"#,
            ),
            (
                "offset",
                Text::new().with_offset(Point::new(-13.4, 12.7)),
                r#"<text fill="none" stroke="none" stroke-width="1" x="0" y="0" dx="-13.4" dy="12.7" font-size="1"></text>"#,
            ),
            (
                "font-size",
                Text::new().with_font_size(1423),
                r#"<text fill="none" stroke="none" stroke-width="1" x="0" y="0" dx="0" dy="0" font-size="1423"></text>"#,
            ),
            (
                "font-weight",
                Text::new().with_font_weight("bold"),
                r#"<text fill="none" stroke="none" stroke-width="1" x="0" y="0" dx="0" dy="0" font-size="1" font-weight="bold"></text>"#,
            ),
            (
                "data",
                Text::new().with_data("some text"),
                r#"<text fill="none" stroke="none" stroke-width="1" x="0" y="0" dx="0" dy="0" font-size="1">some text</text>"#,
            ),
        ];

        for (name, text, want) in cases {
            assert_eq!(text.to_string(), want, "{name}");
        }
    }

    #[test]
    fn test_text_optional_font_attributes_omitted() {
        let rendered = Text::new().with_data("font").to_string();
        assert!(!rendered.contains("font-family="));
        assert!(!rendered.contains("font-weight="));
    }

    #[test]
    fn test_text_optional_font_attributes_follow_font_size() {
        let rendered = Text::new().with_font_family("serif").to_string();
        assert_eq!(rendered.matches("font-family=").count(), 1);
        assert!(rendered.find("font-size=").unwrap() < rendered.find("font-family=").unwrap());

        // An explicitly empty family is still emitted
        let rendered = Text::new().with_font_family("").to_string();
        assert!(rendered.contains(r#" font-family="""#));
    }

    #[test]
    fn test_text_all_setters() {
        let text = Text::new()
            .with_stroke_line_cap("linecap1")
            .with_stroke_color(Rgb::new(93, 31, 17))
            .with_point(Point::new(-131.101, 91.73))
            .with_stroke_width(94.0)
            .with_fill_color(Rgb::new(10, 20, 30))
            .with_data("some text")
            .with_stroke_line_join("linejoin1")
            .with_offset(Point::new(12.0, 15.0))
            .with_font_family("family1")
            .with_font_weight("bold");

        assert_eq!(
            text.to_string(),
            concat!(
                r#"<text fill="rgb(10,20,30)" stroke="rgb(93,31,17)" stroke-width="94" "#,
                r#"stroke-linecap="linecap1" stroke-linejoin="linejoin1" x="-131.101" y="91.73" "#,
                r#"dx="12" dy="15" font-size="1" font-family="family1" font-weight="bold">some text</text>"#,
            )
        );
    }
}
