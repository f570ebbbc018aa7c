//! Error types for Vellum operations.
//!
//! This module provides the main error type [`VellumError`] which wraps the
//! conditions that can occur while loading and elaborating scenes. Building
//! and rendering a [`Document`](crate::document::Document) directly never fails.

use std::io;

use thiserror::Error;

use vellum_core::color::ColorError;

/// The main error type for Vellum operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the scene source next to the TOML error so callers
/// can point at the offending span.
#[derive(Debug, Error)]
pub enum VellumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: toml::de::Error, src: String },

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("Color error: {0}")]
    Color(#[from] ColorError),
}

impl VellumError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
