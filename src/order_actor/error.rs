use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::flower_actor::FlowerError;

/// Errors that can occur while placing or reading orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Flower missing or not enough units; callers cannot tell which.
    #[error("Insufficient stock")]
    InsufficientStock,
    #[error("Quantity must be positive")]
    InvalidQuantity(i64),
    #[error("Total price out of range")]
    PriceOverflow { quantity: i64, price: i64 },
    #[error("Inventory error: {0}")]
    Inventory(#[from] FlowerError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Whether the caller sent something we refuse, as opposed to a fault on our side.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            OrderError::InsufficientStock
                | OrderError::InvalidQuantity(_)
                | OrderError::PriceOverflow { .. }
        )
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
