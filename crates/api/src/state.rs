use std::sync::Arc;

use crate::config::ServerConfig;
use crate::repo::FoodRepo;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the catalog and config sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory food catalog.
    pub foods: Arc<FoodRepo>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(foods: FoodRepo, config: ServerConfig) -> Self {
        Self {
            foods: Arc::new(foods),
            config: Arc::new(config),
        }
    }
}
