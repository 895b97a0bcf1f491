use tracing::{info, error};
use crate::actor_framework::ResourceActor;
use crate::app_system::InventoryConfig;
use crate::clients::{FlowerClient, OrderClient};
use crate::domain::{Flower, Order};
use crate::error::AppError;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The application system that owns the inventory and order stores.
///
/// Responsible for starting the actors, wiring the clients together, and handling shutdown.
pub struct ShopSystem {
    pub flower_client: FlowerClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

/// Ids start at 1 and are never reused.
fn id_sequence() -> impl Fn() -> u64 + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || counter.fetch_add(1, Ordering::SeqCst)
}

impl ShopSystem {
    pub fn new(config: &InventoryConfig) -> Self {
        // 1. Inventory store
        let (flower_actor, flower_resource_client) =
            ResourceActor::<Flower>::new("flowers", config.mailbox_size.get(), id_sequence());
        let flower_client = FlowerClient::new(flower_resource_client);
        let flower_handle = tokio::spawn(flower_actor.run());

        // 2. Order store, orchestrated against the inventory
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new("orders", config.mailbox_size.get(), id_sequence());
        let order_client = OrderClient::new(
            order_resource_client,
            flower_client.clone(),
            config.reserve_stock_on_order,
        );
        let order_handle = tokio::spawn(order_actor.run());

        info!(
            mailbox_size = config.mailbox_size.get(),
            reserve_stock_on_order = config.reserve_stock_on_order,
            "Shop system started"
        );

        Self {
            flower_client,
            order_client,
            handles: vec![flower_handle, order_handle],
        }
    }

    /// Drops this system's clients and waits for the actors to drain.
    ///
    /// Actors only stop once every clone of their client is gone, so any
    /// router holding clones must be dropped first.
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.flower_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(AppError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
