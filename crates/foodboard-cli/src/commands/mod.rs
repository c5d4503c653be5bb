pub mod foods;
pub mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use foodboard_application::DashboardController;
use foodboard_core::food::FoodGateway;
use foodboard_infrastructure::{ConfigService, HttpFoodGateway, TracingNotifier};

/// Wires the dashboard to the configured API and performs the initial load.
pub async fn open_dashboard(api_url: Option<&str>) -> Result<DashboardController> {
    let config = ConfigService::new()
        .load(api_url)
        .context("Failed to load configuration")?;

    tracing::debug!("Using food collection at {}", config.foods_url());

    Ok(open_dashboard_with(Arc::new(HttpFoodGateway::new(&config))).await)
}

/// Builds the dashboard on `gateway` and loads the collection.
///
/// A failed load is logged and the dashboard starts with an empty list.
pub async fn open_dashboard_with(gateway: Arc<dyn FoodGateway>) -> DashboardController {
    let dashboard = DashboardController::new(gateway, Arc::new(TracingNotifier));

    if let Err(e) = dashboard.load().await {
        tracing::error!("[Dashboard] Error loading foods: {}", e);
    }

    dashboard
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use foodboard_core::food::{Food, FoodDraft, FoodId, NewFood};
    use foodboard_core::{FoodboardError, Result as CoreResult};

    /// Gateway whose list always fails but whose writes succeed.
    struct ListFailsGateway;

    #[async_trait]
    impl FoodGateway for ListFailsGateway {
        async fn list(&self) -> CoreResult<Vec<Food>> {
            Err(FoodboardError::request("Failed to list foods: connection refused"))
        }

        async fn create(&self, food: &NewFood) -> CoreResult<Food> {
            Ok(Food {
                id: 1,
                name: food.name.clone(),
                description: food.description.clone(),
                price: food.price,
                available: food.available,
                image: food.image.clone(),
            })
        }

        async fn update(&self, _id: FoodId, food: &Food) -> CoreResult<Food> {
            Ok(food.clone())
        }

        async fn delete(&self, _id: FoodId) -> CoreResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_failed_load_starts_with_empty_list() {
        let dashboard = open_dashboard_with(Arc::new(ListFailsGateway)).await;

        assert!(dashboard.foods().await.is_empty());
        assert!(!dashboard.is_create_modal_open().await);
    }

    #[tokio::test]
    async fn test_add_works_after_failed_load() {
        let dashboard = open_dashboard_with(Arc::new(ListFailsGateway)).await;

        dashboard.toggle_create_modal().await;
        let created = dashboard
            .creation_flow()
            .submit(FoodDraft::new("Veggie", "v", 21.5, "http://img"))
            .await;

        assert_eq!(created.map(|f| f.id), Some(1));
        assert_eq!(dashboard.foods().await.len(), 1);
    }
}
