//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use vellum::{VellumError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for VellumError {
    fn from(err: ConfigError) -> Self {
        let kind = match &err {
            ConfigError::MissingFile(_) => io::ErrorKind::NotFound,
        };
        VellumError::Io(io::Error::new(kind, err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (vellum/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, VellumError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("vellum/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "vellum", "vellum") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// Syntax errors keep the file content so they can be reported with a
/// labeled span, the same way scene errors are.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, VellumError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| VellumError::new_parse_error(err, content))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_config_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nstrict = true\n[style]\nstroke_width = 2.5").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert!(config.render().strict());
        assert_eq!(config.style().stroke_width(), Some(2.5));
    }

    #[test]
    fn test_load_config_missing_explicit_path() {
        let err = load_config(Some("does/not/exist.toml")).unwrap_err();
        match err {
            VellumError::Io(io_err) => {
                assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
                assert!(io_err.to_string().contains("exist.toml"));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_unknown_key_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[render]\nstrict_color = true\n").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        match err {
            VellumError::Parse { err, .. } => assert!(err.message().contains("strict_color")),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_invalid_toml_keeps_source() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[render\nstrict = true").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        match err {
            VellumError::Parse { src, .. } => assert!(src.starts_with("[render")),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }
}
