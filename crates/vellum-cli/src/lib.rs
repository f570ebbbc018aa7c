//! Vellum CLI library
//!
//! This module contains the core CLI logic for rendering Vellum scenes.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use vellum::{SceneRenderer, VellumError};

/// Run the Vellum CLI application
///
/// This function reads the input scene, renders it with the loaded
/// configuration and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `VellumError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene parsing errors
/// - Strict color or line keyword errors
pub fn run(args: &Args) -> Result<(), VellumError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let renderer = SceneRenderer::new(app_config);
    let scene = renderer.parse(&source)?;
    let svg = renderer.render_svg(&scene)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
