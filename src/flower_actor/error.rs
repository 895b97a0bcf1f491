use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FlowerError {
    #[error("Flower not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),
    #[error("Flower rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for FlowerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Rejected(reason) => FlowerError::Rejected(reason),
            FrameworkError::NotFound(id) => FlowerError::NotFound(id),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                FlowerError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
