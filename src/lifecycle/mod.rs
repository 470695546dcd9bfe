//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors, plus the ambient setup around them.
//!
//! - [`OrderSystem`] creates the three actors, spawns them and builds the placement
//!   workflow on top of their clients.
//! - [`OrderSystemConfig`] holds the runtime settings, loaded with the `config` crate.
//! - [`setup_tracing`] installs the log subscriber.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**, including the ones held by the placement workflow
//! 2. **Actors detect closure**: `receiver.recv()` returns `None`
//! 3. **Await completion** of every actor task
//!
//! A client clone that is still alive somewhere keeps its actor running, and `shutdown`
//! waits for it.

pub mod config;
pub mod order_system;
pub mod tracing;

pub use self::config::*;
pub use order_system::*;
pub use self::tracing::*;
