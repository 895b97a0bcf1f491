mod domain;
mod clients;
mod api;

mod app_system;
mod error;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod flower_actor;
mod order_actor;

use tracing::{info, Instrument};
use crate::app_system::{setup_tracing, ShopConfig, ShopSystem};
use crate::error::AppError;

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = ShopConfig::load()?;

    // Setup tracing once for the entire application
    setup_tracing(&config.telemetry);

    info!(addr = %config.server.addr(), "Starting flower shop");

    let system = ShopSystem::new(&config.inventory);

    let span = tracing::info_span!("http_server");
    api::serve(api::AppState::from(&system), &config.server.addr(), shutdown_signal())
        .instrument(span)
        .await?;

    // Router is gone, so the system holds the last client handles
    system.shutdown().await?;

    info!("Flower shop stopped");
    Ok(())
}
