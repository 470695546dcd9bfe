use super::OrderSystemConfig;
use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::model::{CustomerId, Order, OrderLineRequest};
use crate::placement::{OrderPlacement, PlacementError};
use tracing::{error, info};

/// The placement workflow wired to the actor-backed stores.
pub type ActorPlacement = OrderPlacement<CustomerClient, ProductClient, OrderClient>;

/// The runtime orchestrator: starts the customer, product and order actors and wires the
/// placement workflow to their clients.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// system.customer_client.register_with_id("C1".into(), customer).await?;
/// system.product_client.create_product_with_id("P1".into(), product).await?;
/// let order = system.create_order("C1".into(), lines).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Customer actor
    pub customer_client: CustomerClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    placement: ActorPlacement,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts the system with default settings. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(OrderSystemConfig::default())
    }

    pub fn with_config(config: OrderSystemConfig) -> Self {
        info!(?config, "Starting order system");

        // None of the actors depend on each other (Context = ())
        let (customer_actor, customer_client) = crate::customer_actor::new(config.channel_capacity);
        let (product_actor, product_client) = crate::product_actor::new(config.channel_capacity);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_capacity);

        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];

        let customer_client = CustomerClient::new(customer_client);
        let product_client = ProductClient::new(product_client);
        let order_client = OrderClient::new(order_client);

        let placement = OrderPlacement::new(
            customer_client.clone(),
            product_client.clone(),
            order_client.clone(),
        )
        .with_max_commit_attempts(config.max_commit_attempts);

        Self {
            customer_client,
            product_client,
            order_client,
            placement,
            handles,
        }
    }

    /// The placement workflow. Clone it to place orders from other tasks; clones keep the
    /// actors alive, so drop them before [`shutdown`](Self::shutdown).
    pub fn placement(&self) -> &ActorPlacement {
        &self.placement
    }

    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        products: Vec<OrderLineRequest>,
    ) -> Result<Order, PlacementError> {
        self.placement.create_order(customer_id, products).await
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping every client closes the actors' channels; each actor then leaves its loop.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.placement);
        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
