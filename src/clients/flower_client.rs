use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Flower, FlowerCreate, FlowerId};
use crate::flower_actor::{FlowerAction, FlowerActionResult, FlowerError};

/// Client for interacting with the flower inventory actor.
#[derive(Clone)]
pub struct FlowerClient {
    inner: ResourceClient<Flower>,
}

impl_basic_client!(FlowerClient, Flower, FlowerId, FlowerError, flower);

impl FlowerClient {
    #[instrument(skip(self))]
    pub async fn create_flower(&self, flower: FlowerCreate) -> Result<Flower, FlowerError> {
        debug!("Sending request");
        self.inner.create(flower).await.map_err(FlowerError::from)
    }

    /// Atomically checks and decrements stock. Returns the stock left.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: FlowerId, quantity: i64) -> Result<i64, FlowerError> {
        debug!("Sending request");
        match self.inner.perform_action(id, FlowerAction::ReserveStock(quantity)).await {
            Ok(FlowerActionResult::Reserved(remaining)) => Ok(remaining),
            Ok(other) => Err(unexpected(other)),
            Err(FrameworkError::Rejected(reason)) => Err(FlowerError::InsufficientStock(reason)),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: FlowerId, quantity: i64) -> Result<i64, FlowerError> {
        debug!("Sending request");
        match self.inner.perform_action(id, FlowerAction::ReleaseStock(quantity)).await {
            Ok(FlowerActionResult::Released(stock)) => Ok(stock),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(e.into()),
        }
    }
}

fn unexpected(result: FlowerActionResult) -> FlowerError {
    FlowerError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}
