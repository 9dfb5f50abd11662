//! REST client for the food API.
//!
//! Wraps the `/foods` collection (list, create, update, delete) using
//! [`reqwest`].

use async_trait::async_trait;
use menu_core::food::{FoodRecord, NewFood};
use menu_core::types::FoodId;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::{FoodGateway, FOODS_PATH};

/// HTTP gateway for a single food API.
pub struct HttpFoodGateway {
    client: reqwest::Client,
    api_url: String,
}

impl HttpFoodGateway {
    /// Build a gateway with its own connection pool and the configured
    /// request timeout.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Create a gateway reusing an existing [`reqwest::Client`].
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:3333`.
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this gateway talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.api_url, FOODS_PATH)
    }

    fn item_url(&self, id: FoodId) -> String {
        format!("{}{}/{}", self.api_url, FOODS_PATH, id)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`GatewayError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), GatewayError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl FoodGateway for HttpFoodGateway {
    async fn list_foods(&self) -> Result<Vec<FoodRecord>, GatewayError> {
        tracing::debug!(url = %self.collection_url(), "GET foods");

        let response = self.client.get(self.collection_url()).send().await?;

        Self::parse_response(response).await
    }

    async fn create_food(&self, food: &NewFood) -> Result<FoodRecord, GatewayError> {
        tracing::debug!(name = %food.name, "POST food");

        let response = self
            .client
            .post(self.collection_url())
            .json(food)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn update_food(
        &self,
        id: FoodId,
        food: &FoodRecord,
    ) -> Result<FoodRecord, GatewayError> {
        tracing::debug!(id, name = %food.name, "PUT food");

        let response = self.client.put(self.item_url(id)).json(food).send().await?;

        Self::parse_response(response).await
    }

    async fn delete_food(&self, id: FoodId) -> Result<(), GatewayError> {
        tracing::debug!(id, "DELETE food");

        let response = self.client.delete(self.item_url(id)).send().await?;

        Self::check_status(response).await
    }
}
