//! Configuration types for Vellum scene rendering.
//!
//! This module provides configuration structures that control how scenes are
//! elaborated into documents. All types implement [`serde::Deserialize`] for
//! loading from TOML and reject keys they do not know.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and render settings.
//! - [`StyleSpec`] - Default style for scene shapes that leave fields unset.
//! - [`RenderConfig`] - Elaboration switches such as strict value checking.
//!
//! # Example
//!
//! ```
//! # use vellum::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [style]
//!     stroke = "black"
//!     stroke_width = 1.5
//!
//!     [render]
//!     strict = true
//! "#).unwrap();
//! assert!(config.render().strict());
//! assert_eq!(config.style().stroke_width(), Some(1.5));
//! ```

use serde::Deserialize;

pub use crate::scene::StyleSpec;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Default style applied to scene shapes.
    #[serde(default)]
    style: StyleSpec,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and render configurations.
    ///
    /// # Arguments
    ///
    /// * `style` - Fallback style for shapes that leave attributes unset.
    /// * `render` - Elaboration switches.
    pub fn new(style: StyleSpec, render: RenderConfig) -> Self {
        Self { style, render }
    }

    /// Returns the default style.
    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Switches that control scene elaboration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Reject values the renderer would not understand: named colors that are
    /// not CSS colors, and unknown line cap or line join keywords.
    #[serde(default)]
    strict: bool,
}

impl RenderConfig {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Returns `true` if colors and line keywords are checked during elaboration.
    pub fn strict(&self) -> bool {
        self.strict
    }
}
