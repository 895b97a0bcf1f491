//! HTTP transport: maps JSON requests onto the inventory and order clients.
//!
//! ## Routes
//!
//! - `GET /flowers/?skip&limit`, `POST /flowers/`, `GET /flowers/{id}`
//! - `POST /orders/`, `GET /orders/?skip&limit`, `GET /orders/{id}`
//! - `GET /health`
//!
//! Collection routes answer with and without the trailing slash.

pub mod dtos;
pub mod error;
mod handlers;

use std::future::Future;

use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::app_system::ShopSystem;
use crate::clients::{FlowerClient, OrderClient};

/// Store handles shared by every request. Cloning is cheap: each field is a
/// channel sender into the owning actor.
#[derive(Clone)]
pub struct AppState {
    pub flowers: FlowerClient,
    pub orders: OrderClient,
}

impl From<&ShopSystem> for AppState {
    fn from(system: &ShopSystem) -> Self {
        Self {
            flowers: system.flower_client.clone(),
            orders: system.order_client.clone(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/flowers", get(handlers::list_flowers).post(handlers::create_flower))
        .route("/flowers/", get(handlers::list_flowers).post(handlers::create_flower))
        .route("/flowers/{id}", get(handlers::get_flower))
        .route("/orders", get(handlers::list_orders).post(handlers::place_order))
        .route("/orders/", get(handlers::list_orders).post(handlers::place_order))
        .route("/orders/{id}", get(handlers::get_order))
        .with_state(state)
}

/// Serve until `shutdown` resolves. The router (and with it every client
/// clone it holds) is dropped before this returns.
pub async fn serve(
    state: AppState,
    addr: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
