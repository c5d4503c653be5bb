use foodboard_core::{ErrorNotifier, FoodboardError};

/// Notifier that logs swallowed errors through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl ErrorNotifier for TracingNotifier {
    fn notify(&self, operation: &str, error: &FoodboardError) {
        tracing::error!("[Dashboard] Error on {} food: {}", operation, error);
    }
}
