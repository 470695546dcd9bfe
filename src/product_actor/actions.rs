//! Custom actions for the Product actor.
//!
//! These are handled by
//! [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action) in
//! [`entity`](super::entity).

/// Stock operations on a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Writes `quantity` as the new stock level if the current level equals `expected`.
    ///
    /// # Errors
    /// [`ProductError::StockConflict`](super::ProductError::StockConflict) when the
    /// stored level has moved since the caller read it.
    SetQuantity { expected: u32, quantity: u32 },
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductActionResult {
    CheckStock(u32),
    SetQuantity(()),
}
