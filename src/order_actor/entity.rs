//! [`ActorEntity`] implementation for [`Order`].

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::collections::HashSet;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            customer_id: params.customer.id,
            lines: params.lines,
        })
    }

    /// Rejects orders that could not have come out of a successful placement.
    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        if self.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        let mut seen = HashSet::new();
        for line in &self.lines {
            if line.quantity == 0 {
                return Err(OrderError::InconsistentLines(format!(
                    "zero quantity for {}",
                    line.product_id
                )));
            }
            if !seen.insert(&line.product_id) {
                return Err(OrderError::InconsistentLines(format!(
                    "duplicate line for {}",
                    line.product_id
                )));
            }
        }
        Ok(())
    }

    // Placed orders are immutable.
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
