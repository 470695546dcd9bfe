//! Plain data types managed by the actors and passed through the placement workflow.
//!
//! Entities ([`Customer`], [`Product`], [`Order`]) implement
//! [`ActorEntity`](resource_actor::ActorEntity) in their actor modules; the `*Create` and
//! `*Update` structs are the payloads those actors accept.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
