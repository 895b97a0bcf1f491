use crate::actor_framework::Entity;
use crate::domain::{Flower, FlowerCreate, FlowerId};
use super::actions::{FlowerAction, FlowerActionResult};

impl Entity for Flower {
    type Id = FlowerId;
    type CreateParams = FlowerCreate;
    type Action = FlowerAction;
    type ActionResult = FlowerActionResult;

    fn id(&self) -> &FlowerId { &self.id }

    /// Maps the creation payload onto a stored record. Stock and price are
    /// taken as given; callers are trusted to send sensible values.
    fn from_create_params(id: FlowerId, params: FlowerCreate) -> Result<Self, String> {
        Ok(Flower::new(id, params.name, params.stock, params.price))
    }

    /// Handles flower-specific actions.
    ///
    /// # Errors
    /// Returns an error if asked to reserve more stock than is available.
    fn handle_action(&mut self, action: FlowerAction) -> Result<FlowerActionResult, String> {
        match action {
            FlowerAction::ReserveStock(amount) => {
                if self.has_stock_for(amount) {
                    self.stock -= amount;
                    Ok(FlowerActionResult::Reserved(self.stock))
                } else {
                    Err(format!("Insufficient stock: {} available, {} requested", self.stock, amount))
                }
            }
            FlowerAction::ReleaseStock(amount) => {
                self.stock += amount;
                Ok(FlowerActionResult::Released(self.stock))
            }
        }
    }
}
