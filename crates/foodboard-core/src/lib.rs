pub mod config;
pub mod error;
pub mod food;
pub mod notifier;
pub mod store;

// Re-export common types
pub use error::{FoodboardError, Result};
pub use notifier::ErrorNotifier;
pub use store::RecordStore;
