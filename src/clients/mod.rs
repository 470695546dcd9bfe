//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each client maps [`FrameworkError`](resource_actor::FrameworkError)s to its actor's
//! error enum (recovering typed entity errors) and implements the storage port the
//! placement workflow consumes.

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
