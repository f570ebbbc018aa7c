//! Vellum - Build SVG documents from typed shapes or declarative scenes.
//!
//! The shape model lives in `vellum-core` and is re-exported here. On top of it,
//! this crate adds TOML [`scene`] descriptions, their [`config`]uration and the
//! [`SceneRenderer`] that turns a scene into SVG text.

pub mod config;
pub mod scene;

mod error;

pub use vellum_core::{color, document, draw, export, geometry};

pub use error::VellumError;

use log::{debug, info};

use vellum_core::document::Document;

use config::AppConfig;
use scene::Scene;

/// Builder for parsing and rendering Vellum scenes.
///
/// # Examples
///
/// ```
/// use vellum::{SceneRenderer, config::AppConfig};
///
/// let source = r#"
///     [[objects]]
///     kind = "circle"
///     radius = 4
/// "#;
///
/// let renderer = SceneRenderer::new(AppConfig::default());
/// let scene = renderer.parse(source).expect("Failed to parse");
/// let svg = renderer.render_svg(&scene).expect("Failed to render");
///
/// assert!(svg.contains(r#"r="4""#));
/// ```
#[derive(Debug, Default)]
pub struct SceneRenderer {
    config: AppConfig,
}

impl SceneRenderer {
    /// Create a new scene renderer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including default style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this renderer was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse TOML source into a scene.
    ///
    /// # Errors
    ///
    /// Returns `VellumError::Parse` for malformed TOML or unknown object kinds.
    pub fn parse(&self, source: &str) -> Result<Scene, VellumError> {
        info!("Parsing scene");
        Scene::from_toml(source)
    }

    /// Elaborate a scene into a document without rendering it.
    ///
    /// # Errors
    ///
    /// With strict checking enabled, returns `VellumError::Color` for invalid
    /// named colors and `VellumError::Scene` for unknown line keywords.
    pub fn build_document(&self, scene: &Scene) -> Result<Document, VellumError> {
        let document = scene.elaborate(&self.config)?;
        debug!(objects = document.len(); "Scene elaborated");
        Ok(document)
    }

    /// Render a scene to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`SceneRenderer::build_document`].
    pub fn render_svg(&self, scene: &Scene) -> Result<String, VellumError> {
        let document = self.build_document(scene)?;
        let svg = document.render_to_string();

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
