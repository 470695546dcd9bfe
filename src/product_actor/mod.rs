//! # Product Actor
//!
//! The catalog: price and stock per product.
//!
//! ## Overview
//!
//! Besides CRUD the actor offers two stock actions. `CheckStock` reads the current level.
//! `SetQuantity` is a compare-and-set: it writes an absolute quantity only if the stored
//! quantity still equals the one the caller observed. Sent as one
//! [`BatchAction`](resource_actor::ResourceRequest::BatchAction), a list of `SetQuantity`
//! actions either all land or none do, which is how the placement workflow commits stock
//! without overselling.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_placement::clients::ProductClient;
//! use order_placement::model::{ProductCreate, StockUpdate};
//! use order_placement::product_actor;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = ProductCreate {
//!         name: "Widget".to_string(),
//!         price: Decimal::new(2999, 2),
//!         quantity: 100,
//!     };
//!     let product = client.create_product(params).await?;
//!
//!     client
//!         .set_quantities(vec![StockUpdate {
//!             product_id: product.id.clone(),
//!             expected: 100,
//!             quantity: 95,
//!         }])
//!         .await?;
//!     assert_eq!(client.check_stock(product.id).await?, 95);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
