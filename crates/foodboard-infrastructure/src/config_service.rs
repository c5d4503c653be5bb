//! Configuration service implementation.
//!
//! Resolves the [`ApiConfig`] from, in order of precedence:
//! 1. an explicit base URL override (e.g. the `--api-url` flag)
//! 2. environment variables (`FOODBOARD_API_URL`, `FOODBOARD_TIMEOUT_SECS`)
//! 3. `config.toml` in the foodboard config directory
//! 4. built-in defaults

use std::env;
use std::path::PathBuf;

use foodboard_core::config::ApiConfig;
use foodboard_core::{FoodboardError, Result};

use crate::paths::FoodboardPaths;

pub const ENV_API_URL: &str = "FOODBOARD_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "FOODBOARD_TIMEOUT_SECS";

/// Loads [`ApiConfig`] from file and environment.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// `None` when the platform config directory cannot be resolved.
    config_path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a ConfigService reading the default `config.toml`.
    pub fn new() -> Self {
        let config_path = match FoodboardPaths::config_file() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("[ConfigService] {}, falling back to defaults", e);
                None
            }
        };
        Self { config_path }
    }

    /// Creates a ConfigService with a custom file path (for testing).
    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            config_path: Some(config_path),
        }
    }

    /// Resolves the configuration with the process environment applied.
    pub fn load(&self, base_url_override: Option<&str>) -> Result<ApiConfig> {
        self.load_with_env(base_url_override, |key| env::var(key).ok())
    }

    /// Resolves the configuration using `lookup` for environment variables.
    ///
    /// # Errors
    ///
    /// Returns a config error if the file cannot be parsed or the resolved
    /// timeout is not a positive number of seconds.
    pub fn load_with_env<F>(&self, base_url_override: Option<&str>, lookup: F) -> Result<ApiConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.load_file()?;

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("[ConfigService] {} overrides base_url", ENV_API_URL);
            config.base_url = url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw.trim().parse().map_err(|e| {
                FoodboardError::config(format!("Invalid {} value '{}': {}", ENV_TIMEOUT_SECS, raw, e))
            })?;
        }

        if let Some(url) = base_url_override {
            config.base_url = url.to_string();
        }

        if config.timeout_secs == 0 {
            return Err(FoodboardError::config(
                "timeout_secs must be greater than 0",
            ));
        }

        tracing::debug!(
            "[ConfigService] Resolved base_url={}, timeout_secs={}",
            config.base_url,
            config.timeout_secs
        );

        Ok(config)
    }

    /// Reads `config.toml`. A missing file yields the defaults.
    fn load_file(&self) -> Result<ApiConfig> {
        let Some(path) = &self.config_path else {
            return Ok(ApiConfig::default());
        };

        if !path.exists() {
            tracing::debug!(
                "[ConfigService] No config file at {}, using defaults",
                path.display()
            );
            return Ok(ApiConfig::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| FoodboardError::io(format!("Failed to read {}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| {
            FoodboardError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
