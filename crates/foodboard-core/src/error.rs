//! Error types for Foodboard.

use thiserror::Error;

/// A shared error type for the whole Foodboard workspace.
///
/// The gateway only ever produces [`FoodboardError::Request`]: transport
/// failures, non-2xx statuses and unparseable bodies are not told apart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FoodboardError {
    /// Any failed call against the food collection.
    #[error("Request failed: {message}")]
    Request { message: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// An update was submitted while no record was selected for editing.
    #[error("No food is selected for editing")]
    NoSelection,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl FoodboardError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Request error
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a failed request
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// A type alias for `Result<T, FoodboardError>`.
pub type Result<T> = std::result::Result<T, FoodboardError>;
