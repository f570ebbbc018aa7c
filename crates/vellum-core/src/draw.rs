//! Drawable Components for Markup Rendering
//!
//! This module provides the shape types, the shared style bundle, the closed
//! [`Object`] union and pre-rendered [`Section`]s. Every drawable implements the
//! [`Render`] trait, which writes exactly one markup fragment to a text sink, and
//! [`std::fmt::Display`] with the same output.
mod object;
mod section;
mod shape;
mod style;

pub use object::Object;
pub use section::{Section, SectionBuilder};
pub use shape::{Circle, Polyline, Rectangle, Text};
pub use style::{StrokeCap, StrokeJoin, Style, Styled};

use std::fmt;

/// Writes a markup fragment to a text sink.
///
/// Rendering itself never fails; the only errors are those reported by the sink.
pub trait Render {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result;
}

/// Implements [`fmt::Display`] by delegating to [`Render`].
macro_rules! display_via_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::draw::Render::render(self, f)
                }
            }
        )+
    };
}

pub(crate) use display_via_render;
