//! Vellum Core Types and Definitions
//!
//! This crate provides the in-memory model for building SVG markup. It includes:
//!
//! - **Colors**: The four color encodings and their text forms ([`color::Color`])
//! - **Geometry**: Plain coordinate pairs ([`geometry::Point`])
//! - **Draw**: Shapes, the shared style bundle, the [`draw::Object`] union and
//!   pre-rendered sections ([`draw`] module)
//! - **Document**: The top-level container wrapping objects in the SVG envelope
//!   ([`document::Document`])
//! - **Export**: Conversion into the `svg` crate's node tree ([`export`] module)
//!
//! # Example
//!
//! ```
//! use vellum_core::{
//!     color::Rgb,
//!     document::Document,
//!     draw::{Circle, SectionBuilder, Styled, Text},
//!     geometry::Point,
//! };
//!
//! let mut doc = Document::new();
//! doc.add(Circle::new().with_center(Point::new(20.0, 20.0)).with_radius(5.0));
//!
//! let label = SectionBuilder::new()
//!     .add(Text::new().with_data("hello").with_fill_color(Rgb::new(10, 20, 30)))
//!     .build();
//! doc.add(label);
//!
//! let markup = doc.render_to_string();
//! assert!(markup.starts_with("<?xml"));
//! assert!(markup.ends_with("</svg>"));
//! ```

pub mod color;
pub mod document;
pub mod draw;
pub mod export;
pub mod geometry;
