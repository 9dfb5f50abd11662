#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use menu_api::config::ServerConfig;
use menu_api::repo::FoodRepo;
use menu_api::state::AppState;
use menu_core::food::FoodRecord;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        seed_file: None,
    }
}

/// Build the full application router over the given catalog.
///
/// Goes through `menu_api::build_router` so tests exercise the same
/// middleware stack production uses.
pub fn build_test_app(foods: FoodRepo) -> Router {
    menu_api::build_router(AppState::new(foods, test_config()))
}

/// Router over a catalog seeded with `records`.
pub fn seeded_app(records: Vec<FoodRecord>) -> Router {
    build_test_app(FoodRepo::with_records(records).unwrap())
}

pub fn food(id: i64, name: &str) -> FoodRecord {
    FoodRecord {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        price: "19.90".to_string(),
        available: true,
        image: format!("http://img.test/{id}.png"),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
