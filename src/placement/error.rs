use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, OrderId, ProductId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use std::fmt::Display;
use thiserror::Error;

/// A requested quantity the catalog could not cover at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub product_id: ProductId,
    pub requested: u32,
    pub available: u32,
}

impl Display for Shortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (requested {}, available {})",
            self.product_id, self.requested, self.available
        )
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why an order could not be placed.
///
/// The first four variants describe the request and are safe to show to the caller
/// (see [`is_user_facing`](Self::is_user_facing)). The rest come from storage.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlacementError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Products not found: {}", join(.0))]
    ProductNotFound(Vec<ProductId>),

    #[error("Insufficient stock: {}", join(.0))]
    InsufficientStock(Vec<Shortfall>),

    #[error("Invalid order request: {0}")]
    InvalidRequest(String),

    /// Stock kept changing between validation and commit.
    #[error("Stock changed during commit; gave up after {attempts} attempts")]
    CommitConflict { attempts: u32 },

    /// The stock write failed and the order created for it could not be removed, so the
    /// order is still stored. Never retried.
    #[error("Order {order_id} left without stock write ({write_error}): {discard_error}")]
    CommitIncomplete {
        order_id: OrderId,
        write_error: Box<PlacementError>,
        discard_error: OrderError,
    },

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl PlacementError {
    /// True for errors caused by the request itself rather than by storage.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            PlacementError::CustomerNotFound(_)
                | PlacementError::ProductNotFound(_)
                | PlacementError::InsufficientStock(_)
                | PlacementError::InvalidRequest(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_list_every_product() {
        let err = PlacementError::ProductNotFound(vec!["P2".into(), "P3".into()]);
        assert_eq!(err.to_string(), "Products not found: P2, P3");

        let err = PlacementError::InsufficientStock(vec![Shortfall {
            product_id: "P1".into(),
            requested: 5,
            available: 5,
        }]);
        assert_eq!(
            err.to_string(),
            "Insufficient stock: P1 (requested 5, available 5)"
        );
    }

    #[test]
    fn test_storage_errors_are_not_user_facing() {
        assert!(PlacementError::CustomerNotFound("C9".into()).is_user_facing());
        assert!(PlacementError::InvalidRequest("no lines".into()).is_user_facing());
        assert!(!PlacementError::CommitConflict { attempts: 3 }.is_user_facing());
        let incomplete = PlacementError::CommitIncomplete {
            order_id: OrderId::from(1),
            write_error: Box::new(PlacementError::CommitConflict { attempts: 1 }),
            discard_error: OrderError::ActorCommunicationError("Actor closed".into()),
        };
        assert!(!incomplete.is_user_facing());
        assert!(incomplete.to_string().starts_with("Order order_1 left without stock write"));
        let storage: PlacementError =
            ProductError::ActorCommunicationError("Actor closed".into()).into();
        assert!(!storage.is_user_facing());
        assert_eq!(storage.to_string(), "Actor communication error: Actor closed");
    }
}
