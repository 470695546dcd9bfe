//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order already exists: {0}")]
    AlreadyExists(String),

    /// An order must have at least one line.
    #[error("Order has no lines")]
    EmptyOrder,

    /// Lines must name distinct products with a positive quantity.
    #[error("Inconsistent order lines: {0}")]
    InconsistentLines(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
