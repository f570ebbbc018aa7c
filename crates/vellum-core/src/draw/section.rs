//! Pre-rendered groups of objects.
//!
//! A [`SectionBuilder`] collects objects and flattens them into a [`Section`]:
//! an immutable markup fragment that is rendered eagerly, once, at build time.
//! Because a section is already text, nesting sections costs one string copy at
//! build time and nothing extra when the enclosing document renders.
//!
//! # Builder reuse
//!
//! [`SectionBuilder::build`] takes `&self` and is a snapshot: the builder keeps
//! its objects, and can be extended and built again.
//!
//! ```
//! # use vellum_core::draw::{Circle, Polyline, SectionBuilder};
//! let mut builder = SectionBuilder::new();
//! builder.add(Circle::new());
//! let first = builder.build();
//!
//! builder.add(Polyline::new());
//! let second = builder.build();
//!
//! assert_eq!(first.as_str(), Circle::new().to_string());
//! assert_eq!(second.as_str(), format!("{}{}", Circle::new(), Polyline::new()));
//! ```

use std::{fmt, sync::Arc};

use log::debug;

use crate::draw::{Object, Render, display_via_render};

/// An immutable, already-rendered markup fragment.
///
/// Clones share the same fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    rendered: Arc<str>,
}

impl Section {
    /// Returns the rendered markup.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Returns `true` if the section renders to nothing.
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}

impl Render for Section {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_str(&self.rendered)
    }
}

display_via_render!(Section);

/// Accumulates objects, in insertion order, to be flattened into a [`Section`].
#[derive(Debug, Clone, Default)]
pub struct SectionBuilder {
    objects: Vec<Object>,
}

impl SectionBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object; previously built sections are accepted too.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vellum_core::draw::{Circle, SectionBuilder, Text};
    /// let inner = SectionBuilder::new().add(Text::new()).build();
    /// let outer = SectionBuilder::new().add(Circle::new()).add(inner).build();
    /// assert_eq!(outer.as_str(), format!("{}{}", Circle::new(), Text::new()));
    /// ```
    pub fn add(&mut self, object: impl Into<Object>) -> &mut Self {
        self.objects.push(object.into());
        self
    }

    /// Returns the number of objects held.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Renders every held object, in order, into a new [`Section`].
    ///
    /// An empty builder yields an empty section.
    pub fn build(&self) -> Section {
        let mut rendered = String::new();
        for object in &self.objects {
            object
                .render(&mut rendered)
                .expect("Writing to String buffer is infallible");
        }

        debug!(objects = self.objects.len(), bytes = rendered.len(); "Section built");

        Section {
            rendered: rendered.into(),
        }
    }
}

impl<T: Into<Object>> Extend<T> for SectionBuilder {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.objects.extend(iter.into_iter().map(Into::into));
    }
}

impl<T: Into<Object>> FromIterator<T> for SectionBuilder {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Circle, Polyline, Rectangle, Text};

    #[test]
    fn test_empty_builder_builds_empty_section() {
        let section = SectionBuilder::new().build();
        assert!(section.is_empty());
        assert_eq!(section.to_string(), "");
    }

    #[test]
    fn test_section_preserves_insertion_order() {
        let section = SectionBuilder::new()
            .add(Polyline::new())
            .add(Circle::new())
            .add(Text::new())
            .build();

        assert_eq!(
            section.as_str(),
            format!("{}{}{}", Polyline::new(), Circle::new(), Text::new())
        );
    }

    #[test]
    fn test_nested_sections_flatten() {
        let innermost = SectionBuilder::new().build();
        let inner = SectionBuilder::new()
            .add(Polyline::new())
            .add(Polyline::new())
            .add(Rectangle::new())
            .add(innermost)
            .build();
        let outer = SectionBuilder::new()
            .add(Circle::new())
            .add(Text::new())
            .add(inner)
            .build();

        let want = format!(
            "{}{}{}{}{}",
            Circle::new(),
            Text::new(),
            Polyline::new(),
            Polyline::new(),
            Rectangle::new()
        );
        assert_eq!(outer.as_str(), want);
    }

    #[test]
    fn test_build_is_a_snapshot() {
        let mut builder = SectionBuilder::new();
        builder.add(Circle::new());

        let first = builder.build();
        let again = builder.build();
        assert_eq!(first, again);
        assert_eq!(builder.len(), 1);

        builder.add(Rectangle::new());
        let extended = builder.build();
        assert_eq!(first.as_str(), Circle::new().to_string());
        assert_eq!(
            extended.as_str(),
            format!("{}{}", Circle::new(), Rectangle::new())
        );
    }

    #[test]
    fn test_builder_from_iterator() {
        let builder: SectionBuilder = vec![Circle::new(), Circle::new()].into_iter().collect();
        assert_eq!(builder.len(), 2);
        assert!(!builder.is_empty());
        assert_eq!(
            builder.build().as_str(),
            format!("{}{}", Circle::new(), Circle::new())
        );
    }
}
