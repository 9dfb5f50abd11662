//! Handlers for the `/foods` collection.
//!
//! Bodies are bare JSON records, matching what a JSON file server returns.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use menu_core::error::CoreError;
use menu_core::food::{validate_food_fields, NewFood};
use menu_core::types::FoodId;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

fn not_found(id: FoodId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Food", id })
}

/// GET /foods
///
/// List the full catalog in insertion order.
pub async fn list_foods(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let foods = state.foods.list().await;

    Ok(Json(foods))
}

/// GET /foods/{id}
pub async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<FoodId>,
) -> AppResult<impl IntoResponse> {
    let food = state.foods.find_by_id(id).await.ok_or_else(|| not_found(id))?;

    Ok(Json(food))
}

/// POST /foods
///
/// Create a food and return it with its assigned id.
pub async fn create_food(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewFood>,
) -> AppResult<impl IntoResponse> {
    validate_food_fields(&input.name, &input.price)?;

    let food = state.foods.create(input).await?;

    tracing::info!(food_id = food.id, name = %food.name, "Food created");

    Ok((StatusCode::CREATED, Json(food)))
}

/// PUT /foods/{id}
///
/// Replace every field of a food. An `id` inside the body is ignored; the
/// path decides which record is replaced.
pub async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<FoodId>,
    JsonBody(input): JsonBody<NewFood>,
) -> AppResult<impl IntoResponse> {
    validate_food_fields(&input.name, &input.price)?;

    let food = state
        .foods
        .replace(id, input)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(food_id = id, available = food.available, "Food updated");

    Ok(Json(food))
}

/// DELETE /foods/{id}
///
/// Responds with an empty JSON object on success.
pub async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<FoodId>,
) -> AppResult<impl IntoResponse> {
    if !state.foods.delete(id).await {
        return Err(not_found(id));
    }

    tracing::info!(food_id = id, "Food deleted");

    Ok(Json(serde_json::json!({})))
}
