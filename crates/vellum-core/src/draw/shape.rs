//! The four concrete shape kinds.
//!
//! Each shape owns a [`Style`](crate::draw::Style) bundle plus its own geometry,
//! and renders a single SVG element. Attribute order in the output is fixed:
//! style first, then geometry, except for [`Rectangle`] which writes geometry
//! first.

mod circle;
mod polyline;
mod rectangle;
mod text;

pub use circle::Circle;
pub use polyline::Polyline;
pub use rectangle::Rectangle;
pub use text::Text;

/// Implements [`Styled`](crate::draw::Styled) for a shape with a `style` field.
macro_rules! impl_styled {
    ($ty:ty) => {
        impl $crate::draw::Styled for $ty {
            fn style(&self) -> &$crate::draw::Style {
                &self.style
            }

            fn style_mut(&mut self) -> &mut $crate::draw::Style {
                &mut self.style
            }
        }
    };
}

pub(crate) use impl_styled;
