//! The root container that renders a complete SVG document.
//!
//! A [`Document`] holds an ordered list of [`Object`]s and writes them between a
//! fixed XML declaration plus `<svg>` opening tag and the closing `</svg>` tag.
//! The output has no line breaks, no indentation and no trailing newline.
//!
//! Rendering is a read-only operation: it may be repeated at will, and objects
//! may still be added afterwards.

use std::{fmt, io};

use log::{debug, trace};

use crate::draw::{Object, Render, display_via_render};

/// Everything written before the first object.
pub const SVG_HEADER: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" ?>"#,
    r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#,
);

/// Everything written after the last object.
pub const SVG_FOOTER: &str = "</svg>";

/// An SVG document under construction.
///
/// # Examples
///
/// ```
/// # use vellum_core::document::Document;
/// # use vellum_core::draw::Circle;
/// let mut doc = Document::new();
/// doc.add(Circle::new());
///
/// assert_eq!(
///     doc.render_to_string(),
///     concat!(
///         r#"<?xml version="1.0" encoding="UTF-8" ?>"#,
///         r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#,
///         r#"<circle fill="none" stroke="none" stroke-width="1" cx="0" cy="0" r="1"/>"#,
///         "</svg>",
///     )
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    objects: Vec<Object>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object; the document takes ownership of it.
    pub fn add(&mut self, object: impl Into<Object>) -> &mut Self {
        self.objects.push(object.into());
        self
    }

    /// Returns the objects in insertion order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Renders the document into a new `String`.
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        self.render(&mut out)
            .expect("Writing to String buffer is infallible");
        out
    }

    /// Renders the document to a byte sink such as a file or socket.
    ///
    /// The sink is neither flushed nor closed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error reported by `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        let markup = self.render_to_string();
        debug!(bytes = markup.len(); "Writing document");
        writer.write_all(markup.as_bytes())
    }
}

impl Render for Document {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        trace!(objects = self.objects.len(); "Rendering document");

        out.write_str(SVG_HEADER)?;
        for object in &self.objects {
            object.render(out)?;
        }
        out.write_str(SVG_FOOTER)
    }
}

display_via_render!(Document);

impl<T: Into<Object>> Extend<T> for Document {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.objects.extend(iter.into_iter().map(Into::into));
    }
}

impl<T: Into<Object>> FromIterator<T> for Document {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut doc = Self::new();
        doc.extend(iter);
        doc
    }
}
