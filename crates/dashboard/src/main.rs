//! `menu-dashboard` -- console front-end for the menu catalog.
//!
//! Loads the catalog from the food API and reads commands from stdin.
//! Logs go to stderr so they do not interleave with the rendered list.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                 | Description                  |
//! |------------------------|----------|-------------------------|------------------------------|
//! | `FOODS_API_URL`        | no       | `http://localhost:3333` | Base URL of the food API     |
//! | `GATEWAY_TIMEOUT_SECS` | no       | `30`                    | Per-request timeout          |
//! | `RUST_LOG`             | no       | `menu_dashboard=info,menu_gateway=info` | Log filter   |

use std::sync::Arc;

use menu_dashboard::{console, Dashboard};
use menu_gateway::{GatewayConfig, HttpFoodGateway};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_dashboard=info,menu_gateway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GatewayConfig::from_env()?;
    tracing::info!(api_url = %config.api_url, timeout = ?config.timeout, "Starting menu-dashboard");

    let gateway = HttpFoodGateway::new(&config)?;
    let dashboard = Dashboard::new(Arc::new(gateway));

    if let Err(e) = dashboard.initialize().await {
        tracing::error!(error = %e, "Failed to load foods");
    }

    console::run(&dashboard, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    tracing::info!("Bye");
    Ok(())
}
