//! Entry point for the impact API server.
//!
//! Initializes logging, loads configuration from the environment (with
//! `.env` support), builds the historical catalog and the file-backed
//! simulation store, constructs the NEO client, then serves HTTP until
//! the process is terminated.

use std::sync::Arc;

use impactor_api::{AppConfig, AppState, start_server};
use impactor_neo::NeoClient;
use impactor_store::{FileStore, ImpactCatalog, ImpactStore, historical_impacts};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is missing, the historical catalog
/// cannot be built, or the server fails to bind or serve.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env values feed the same variables AppConfig reads.
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("impactor-api starting");

    let config = AppConfig::from_env()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        impact_file = %config.impact_file.display(),
        "configuration loaded"
    );

    let historical = historical_impacts()?;
    info!(count = historical.len(), "historical catalog built");

    let store = ImpactStore::File(FileStore::new(&config.impact_file));
    info!(backend = store.backend(), "impact store ready");

    let catalog = ImpactCatalog::new(historical, store);
    let neo = NeoClient::new(&config.neo)?;

    let state = Arc::new(AppState::new(catalog, neo));
    start_server(&config.server, state).await?;

    Ok(())
}
