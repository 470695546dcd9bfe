//! # Order Placement
//!
//! Places orders against an in-process catalog without overselling: a customer and a
//! set of `(product, quantity)` pairs go in; a priced, persisted order comes out and
//! stock goes down, or nothing changes at all.
//!
//! ## Architecture Notes
//!
//! ### 1. Actors as Storage
//! Customers, products and orders each live in a
//! [`ResourceActor`](resource_actor::ResourceActor) running in its own Tokio task. An
//! actor handles one request at a time, so its state needs no locks, and a batch of
//! product actions is atomic.
//!
//! ### 2. Ports
//! The workflow never talks to actors directly. It depends on three traits in [`ports`]
//! which the typed [`clients`] implement. Tests swap in
//! [`MockClient`](resource_actor::mock::MockClient)-backed clients to script storage
//! replies and failures.
//!
//! ### 3. Atomic Stock Commit
//! Stock is written with a batch of compare-and-set actions keyed on the quantities seen
//! during validation. A placement that loses a race to another one discards its order
//! and validates again. See [`placement`].
//!
//! ### 4. Type-Safe Errors
//! Each actor has its own `thiserror` enum. Errors raised inside an actor cross the
//! channel boxed and are recovered as the typed enum by the client.
//! [`PlacementError`](placement::PlacementError) separates request problems from storage
//! problems.
//!
//! ## Module Tour
//!
//! - [`model`]: ids, entities and payloads
//! - [`customer_actor`], [`product_actor`], [`order_actor`]: the entity implementations
//! - [`clients`]: typed clients, implementing [`ports`]
//! - [`placement`]: the validate, build, commit workflow
//! - [`lifecycle`]: system wiring, config and tracing setup
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod placement;
pub mod ports;
pub mod product_actor;
