use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use crate::ports::OrderStore;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => OrderError::AlreadyExists(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    #[instrument(skip(self, order), fields(customer_id = %order.customer.id))]
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!(lines = ?order.lines, "Sending request");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    async fn discard(&self, id: &OrderId) -> Result<(), OrderError> {
        self.delete(id.clone()).await
    }
}
