pub mod config_service;
pub mod http_food_gateway;
pub mod paths;
pub mod tracing_notifier;

pub use crate::config_service::ConfigService;
pub use crate::http_food_gateway::HttpFoodGateway;
pub use crate::paths::FoodboardPaths;
pub use crate::tracing_notifier::TracingNotifier;
