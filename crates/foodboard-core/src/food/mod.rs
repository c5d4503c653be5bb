//! Food domain models and the gateway trait.
//!
//! A food is a menu item. Records only exist locally once the remote
//! collection has acknowledged them, so every record carries a server id.

mod gateway;
mod model;

pub use gateway::FoodGateway;
pub use model::{Food, FoodDraft, FoodEdits, FoodId, NewFood};
