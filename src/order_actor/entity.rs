use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderId};

impl Entity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type Action = (); // orders are immutable
    type ActionResult = ();

    fn id(&self) -> &OrderId { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// The total is computed by the caller before the order reaches the store.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, String> {
        Ok(Order::new(id, params.flower_id, params.quantity, params.total_price))
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
