//! # Resource Actor
//!
//! Building blocks for in-process stores built on the **Actor Model**: each resource type
//! (customers, products, orders, ...) lives in one `ResourceActor` task that owns its
//! state and answers requests sequentially over a channel.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the resource's data and business rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and state ownership
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Operations
//!
//! Every actor supports create (generated or explicit id), get, get-many, update, delete,
//! single actions and batch actions. A batch action is all-or-nothing and, because the
//! actor is sequential, atomic with respect to every other request on that actor. That
//! is the primitive to reach for when several entities must change together, for
//! example a guarded stock write across many products.
//!
//! ## Context Injection
//!
//! Dependencies are injected when the loop starts (`actor.run(context)`), not when the
//! actor is constructed, so actors that depend on each other can be created first and
//! wired afterwards.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//! - No shared mutable state; the store is owned by the task
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so
//! code built on clients can be tested without actors, including storage failures.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
