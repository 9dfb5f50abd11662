use axum::routing::get;
use axum::Router;

use crate::handlers::foods;
use crate::state::AppState;

/// Food catalog routes mounted at the root.
///
/// ```text
/// GET    /foods       -> list_foods
/// POST   /foods       -> create_food
/// GET    /foods/{id}  -> get_food
/// PUT    /foods/{id}  -> update_food
/// DELETE /foods/{id}  -> delete_food
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/foods", get(foods::list_foods).post(foods::create_food))
        .route(
            "/foods/{id}",
            get(foods::get_food)
                .put(foods::update_food)
                .delete(foods::delete_food),
        )
}
