//! Food gateway trait.

use async_trait::async_trait;

use super::model::{Food, FoodId, NewFood};
use crate::error::Result;

/// Access to the remote food collection.
///
/// Every method issues exactly one request. Implementations map any failure
/// (transport, non-2xx status, unparseable body) to
/// [`FoodboardError::Request`](crate::FoodboardError::Request).
#[async_trait]
pub trait FoodGateway: Send + Sync {
    /// `GET /foods`
    async fn list(&self) -> Result<Vec<Food>>;

    /// `POST /foods`, returning the record with its server-assigned id.
    async fn create(&self, food: &NewFood) -> Result<Food>;

    /// `PUT /foods/{id}` with full-replace semantics.
    async fn update(&self, id: FoodId, food: &Food) -> Result<Food>;

    /// `DELETE /foods/{id}`
    async fn delete(&self, id: FoodId) -> Result<()>;
}
