//! # Customer Actor
//!
//! Owns customer records. The placement workflow only reads from it (through
//! [`CustomerReader`](crate::ports::CustomerReader)); registration and updates are for
//! whoever seeds the system.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_placement::clients::CustomerClient;
//! use order_placement::customer_actor;
//! use order_placement::model::CustomerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = customer_actor::new(32);
//!     let client = CustomerClient::new(generic_client);
//!
//!     // No dependencies, so the context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let params = CustomerCreate {
//!         name: "Alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!     };
//!     let customer = client.register_with_id("C1".into(), params).await?;
//!     assert_eq!(customer.id.as_str(), "C1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Customer;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(buffer_size)
}
