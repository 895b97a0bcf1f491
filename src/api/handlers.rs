use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::api::dtos::{Pagination, PlaceOrderRequest};
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::domain::{Flower, FlowerCreate, FlowerId, Order, OrderId};

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "flower-shop" }))
}

/// `GET /flowers/?skip=&limit=`
#[instrument(skip(state))]
pub async fn list_flowers(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Flower>>, ApiError> {
    let flowers = state.flowers.list_flowers(page.skip, page.limit).await?;
    Ok(Json(flowers))
}

/// `GET /flowers/{id}`
#[instrument(skip(state))]
pub async fn get_flower(
    State(state): State<AppState>,
    Path(id): Path<FlowerId>,
) -> Result<Json<Flower>, ApiError> {
    state.flowers.get_flower(id).await?
        .map(Json)
        .ok_or(ApiError::NotFound("Flower not found"))
}

/// `POST /flowers/`
#[instrument(skip(state))]
pub async fn create_flower(
    State(state): State<AppState>,
    Json(payload): Json<FlowerCreate>,
) -> Result<Json<Flower>, ApiError> {
    let flower = state.flowers.create_flower(payload).await?;
    Ok(Json(flower))
}

/// `POST /orders/`
#[instrument(skip(state))]
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<Json<Order>, ApiError> {
    if let Some(claimed) = request.total_price {
        debug!(claimed, "Ignoring client-supplied totalPrice");
    }
    let order = state.orders.place_order(request.flower_id, request.quantity).await?;
    Ok(Json(order))
}

/// `GET /orders/?skip=&limit=`
#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.orders.list_orders(page.skip, page.limit).await?;
    Ok(Json(orders))
}

/// `GET /orders/{id}`
#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, ApiError> {
    state.orders.get_order(id).await?
        .map(Json)
        .ok_or(ApiError::NotFound("Order not found"))
}
