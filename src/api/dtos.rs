use serde::Deserialize;

use crate::domain::FlowerId;

pub const DEFAULT_PAGE_LIMIT: usize = 10;

fn default_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

/// `?skip=&limit=` query parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Body of `POST /orders/`.
///
/// `totalPrice` is accepted for compatibility but always recomputed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(alias = "flower_id")]
    pub flower_id: FlowerId,
    pub quantity: i64,
    #[serde(default, alias = "total_price")]
    pub total_price: Option<i64>,
}
