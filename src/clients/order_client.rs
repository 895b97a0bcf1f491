use tracing::{error, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::clients::FlowerClient;
use crate::domain::{FlowerId, Order, OrderCreate, OrderId};
use crate::flower_actor::FlowerError;
use crate::order_actor::OrderError;

/// Client for interacting with the Order actor.
///
/// Order placement is orchestrated here: the flower is looked up and checked
/// against the inventory before anything reaches the order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    flower_client: FlowerClient,
    reserve_stock: bool,
}

impl OrderClient {
    /// With `reserve_stock` off, stock is only checked, never decremented.
    pub fn new(inner: ResourceClient<Order>, flower_client: FlowerClient, reserve_stock: bool) -> Self {
        Self {
            inner,
            flower_client,
            reserve_stock,
        }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, flower_id: FlowerId, quantity: i64) -> Result<Order, OrderError> {
        info!("Processing place_order request");

        if quantity <= 0 {
            warn!("Rejecting non-positive quantity");
            return Err(OrderError::InvalidQuantity(quantity));
        }

        // Step 1: Look up the flower
        let flower = match self.flower_client.get_flower(flower_id).await? {
            Some(flower) => flower,
            None => {
                warn!("Flower not found");
                return Err(OrderError::InsufficientStock);
            }
        };

        // Step 2: Point-in-time stock check
        if !flower.has_stock_for(quantity) {
            warn!(stock = flower.stock, "Not enough stock");
            return Err(OrderError::InsufficientStock);
        }

        // Step 3: Price the order
        let total_price = flower.price_for(quantity).ok_or(OrderError::PriceOverflow {
            quantity,
            price: flower.price,
        })?;

        // Step 4: Optionally take the units out of inventory
        if self.reserve_stock {
            match self.flower_client.reserve_stock(flower_id, quantity).await {
                Ok(remaining) => info!(remaining, "Stock reserved"),
                Err(FlowerError::InsufficientStock(reason)) => {
                    warn!(reason = %reason, "Stock reservation lost a race");
                    return Err(OrderError::InsufficientStock);
                }
                Err(e) => return Err(e.into()),
            }
        }

        // Step 5: Persist
        let params = OrderCreate {
            flower_id,
            quantity,
            total_price,
        };
        match self.inner.create(params).await {
            Ok(order) => {
                info!(order_id = order.id, total_price, "Order placed");
                Ok(order)
            }
            Err(e) => {
                error!(error = %e, "Failed to persist order");
                if self.reserve_stock {
                    self.restore_stock(flower_id, quantity).await;
                }
                Err(e.into())
            }
        }
    }

    async fn restore_stock(&self, flower_id: FlowerId, quantity: i64) {
        match self.flower_client.release_stock(flower_id, quantity).await {
            Ok(stock) => info!(stock, "Reserved stock released"),
            Err(e) => error!(error = %e, "Failed to release reserved stock"),
        }
    }
}

impl_client_methods!(OrderClient, Order, OrderId, OrderError, order);
