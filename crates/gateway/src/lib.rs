//! Remote data gateway for the `/foods` REST resource.
//!
//! [`FoodGateway`] is the seam the dashboard talks to; [`HttpFoodGateway`]
//! is the production implementation on top of [`reqwest`]. Tests swap in
//! their own implementation of the trait.

pub mod config;
pub mod error;
pub mod http;

use async_trait::async_trait;
use menu_core::food::{FoodRecord, NewFood};
use menu_core::types::FoodId;

pub use config::{ConfigError, GatewayConfig};
pub use error::GatewayError;
pub use http::HttpFoodGateway;

/// Collection path of the food resource, relative to the API base URL.
pub const FOODS_PATH: &str = "/foods";

/// HTTP verbs against the food collection.
///
/// Implementations return parsed records on success and a [`GatewayError`]
/// on transport failure or a non-success status. Retries and timeouts, if
/// any, belong to the implementation.
#[async_trait]
pub trait FoodGateway: Send + Sync {
    /// `GET /foods` -- the full catalog in server order.
    async fn list_foods(&self) -> Result<Vec<FoodRecord>, GatewayError>;

    /// `POST /foods` -- returns the created record with its assigned id.
    async fn create_food(&self, food: &NewFood) -> Result<FoodRecord, GatewayError>;

    /// `PUT /foods/{id}` with the full record as body.
    async fn update_food(&self, id: FoodId, food: &FoodRecord)
        -> Result<FoodRecord, GatewayError>;

    /// `DELETE /foods/{id}`. Any response body is ignored.
    async fn delete_food(&self, id: FoodId) -> Result<(), GatewayError>;
}
