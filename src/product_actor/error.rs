//! Error types for the Product actor.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product with this id is already in the catalog.
    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    /// Prices must be non-negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),

    /// A guarded stock write found a different quantity than expected.
    #[error("Stock conflict on {product_id}: expected {expected}, found {actual}")]
    StockConflict {
        product_id: String,
        expected: u32,
        actual: u32,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
