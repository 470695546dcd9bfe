//! Order storage. Orders are created once and never updated; an order may be deleted
//! again when the placement that created it could not commit its stock.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
