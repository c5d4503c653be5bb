//! Path resolution for foodboard configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/foodboard/         # Config directory (platform default)
//! └── config.toml              # API settings
//! ```

use std::path::PathBuf;

const APP_NAME: &str = "foodboard";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for foodboard.
pub struct FoodboardPaths;

impl FoodboardPaths {
    /// Returns the foodboard configuration directory (e.g. `~/.config/foodboard/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
