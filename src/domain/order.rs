use serde::Serialize;

use super::FlowerId;

pub type OrderId = u64;

/// A placed order. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub flower_id: FlowerId,
    pub quantity: i64,
    pub total_price: i64,
}

/// Payload for persisting an order whose total has already been computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCreate {
    pub flower_id: FlowerId,
    pub quantity: i64,
    pub total_price: i64,
}

impl Order {
    pub fn new(id: OrderId, flower_id: FlowerId, quantity: i64, total_price: i64) -> Self {
        Self {
            id,
            flower_id,
            quantity,
            total_price,
        }
    }
}
