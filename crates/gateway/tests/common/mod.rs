#![allow(dead_code)]

use std::net::SocketAddr;

use menu_api::config::ServerConfig;
use menu_api::repo::FoodRepo;
use menu_api::state::AppState;
use menu_core::food::FoodRecord;

/// Serve the development API on an ephemeral local port.
///
/// Returns the base URL (`http://127.0.0.1:<port>`). The server task lives
/// until the test runtime shuts down.
pub async fn spawn_api(records: Vec<FoodRecord>) -> String {
    let foods = FoodRepo::with_records(records).unwrap();
    let app = menu_api::build_router(AppState::new(foods, ServerConfig::default()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn dead_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
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
