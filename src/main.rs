//! Entry point for the payroll report server.
//!
//! Reads `PAYROLL_BIND_ADDR` and `PAYROLL_DATASET` from the environment,
//! loads the dataset and serves `GET /api/payroll`. Log verbosity follows
//! `RUST_LOG` (default `info`).

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use payroll_report::api::{create_router, AppState};
use payroll_report::config::{DatasetLoader, ServerConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_line_number(true)
        .init();

    if let Err(err) = run().await {
        error!(error = %err, "Payroll report server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let store = DatasetLoader::load(&config.dataset_path)?;
    let state = AppState::from_store(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Payroll report server listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
