//! Error reporting capability.
//!
//! Create and update failures are not returned to the presentation layer.
//! They are handed to an [`ErrorNotifier`] instead, so the sink can be
//! swapped (logging in production, recording in tests).

use crate::error::FoodboardError;

/// Receives errors that are swallowed at the dashboard boundary.
pub trait ErrorNotifier: Send + Sync {
    /// Reports a failed operation.
    ///
    /// # Arguments
    ///
    /// * `operation` - Short name of the failed operation (e.g. "create")
    /// * `error` - The error that was swallowed
    fn notify(&self, operation: &str, error: &FoodboardError);
}

