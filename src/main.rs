//! HTTP server for the salary calculator.
//!
//! Reads `SALARY_CONFIG_DIR` (default `./config/default`) for `policy.yaml`
//! and listens on `SALARY_BIND_ADDR` (default `127.0.0.1:3000`). Log levels
//! follow `RUST_LOG`.

use std::env;

use salary_calculator::api::{AppState, create_router};
use salary_calculator::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_dir = env::var("SALARY_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let config = ConfigLoader::load_or_default(&config_dir)?;
    info!(
        organization = %config.config().organization,
        premium_monthly = %config.rates().premium_monthly,
        standard_monthly = %config.rates().standard_monthly,
        "Salary policy loaded"
    );

    let bind_addr = env::var("SALARY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
    let listener = TcpListener::bind(bind_addr.as_str()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
