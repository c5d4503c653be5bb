//! HttpFoodGateway - REST implementation of [`FoodGateway`].
//!
//! Talks to a JSON food collection:
//! - `GET /foods`
//! - `POST /foods`
//! - `PUT /foods/{id}`
//! - `DELETE /foods/{id}`

use std::time::Duration;

use async_trait::async_trait;
use foodboard_core::config::ApiConfig;
use foodboard_core::food::{Food, FoodGateway, FoodId, NewFood};
use foodboard_core::{FoodboardError, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Food gateway backed by `reqwest`.
#[derive(Clone)]
pub struct HttpFoodGateway {
    client: Client,
    foods_url: String,
    timeout: Duration,
}

impl HttpFoodGateway {
    /// Creates a gateway for the collection described by `config`.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Creates a gateway that reuses an existing client.
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            foods_url: config.foods_url(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// URL of the collection.
    pub fn foods_url(&self) -> &str {
        &self.foods_url
    }

    /// URL of a single food.
    pub fn food_url(&self, id: FoodId) -> String {
        format!("{}/{}", self.foods_url, id)
    }

    /// Sends the request and rejects non-2xx responses.
    async fn send(&self, action: &str, request: RequestBuilder) -> Result<Response> {
        let response = request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FoodboardError::request(format!("Failed to {}: {}", action, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FoodboardError::request(format!(
                "Failed to {} ({}): {}",
                action, status, error_text
            )));
        }

        Ok(response)
    }

    async fn parse<T: DeserializeOwned>(action: &str, response: Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            FoodboardError::request(format!("Failed to parse {} response: {}", action, e))
        })
    }
}

#[async_trait]
impl FoodGateway for HttpFoodGateway {
    async fn list(&self) -> Result<Vec<Food>> {
        tracing::debug!("[HttpFoodGateway] GET {}", self.foods_url);
        let response = self
            .send("list foods", self.client.get(&self.foods_url))
            .await?;
        Self::parse("list foods", response).await
    }

    async fn create(&self, food: &NewFood) -> Result<Food> {
        tracing::debug!("[HttpFoodGateway] POST {}", self.foods_url);
        let response = self
            .send("create food", self.client.post(&self.foods_url).json(food))
            .await?;
        Self::parse("create food", response).await
    }

    async fn update(&self, id: FoodId, food: &Food) -> Result<Food> {
        let url = self.food_url(id);
        tracing::debug!("[HttpFoodGateway] PUT {}", url);
        let response = self
            .send("update food", self.client.put(&url).json(food))
            .await?;
        Self::parse("update food", response).await
    }

    async fn delete(&self, id: FoodId) -> Result<()> {
        let url = self.food_url(id);
        tracing::debug!("[HttpFoodGateway] DELETE {}", url);
        // The response body is not required, so it is never read.
        self.send("delete food", self.client.delete(&url)).await?;
        Ok(())
    }
}
