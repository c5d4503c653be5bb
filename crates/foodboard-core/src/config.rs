//! Client configuration model.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for reaching the food collection.
///
/// Stored as `config.toml`:
///
/// ```toml
/// base_url = "http://localhost:3333"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; `/foods` is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of the food collection, without a trailing slash on the base.
    pub fn foods_url(&self) -> String {
        format!("{}/foods", self.base_url.trim_end_matches('/'))
    }
}
