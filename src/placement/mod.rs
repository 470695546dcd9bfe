//! # Order Placement
//!
//! Validates a request against the customer and product stores, prices it, persists the
//! order and decrements stock. Nothing is written unless validation fully succeeds.
//!
//! ## Stages
//!
//! ```text
//! Validating ──▶ Building ──▶ Committing ──▶ Done
//!     │  ▲                        │
//!     │  └──── stock conflict ────┘   (up to max_commit_attempts)
//!     ▼
//!   error
//! ```
//!
//! 1. [`validator`]: request checks, customer lookup, one batched product lookup, stock check
//! 2. [`builder`]: one priced line per distinct product, at the catalog price just read
//! 3. [`committer`]: create the order, then one guarded stock write for all products
//!
//! The current stage is recorded in the `stage` field of the `create_order` span.
//!
//! ## Concurrency
//!
//! Two placements can validate against the same stock. The stock write is a batch of
//! compare-and-set operations on the quantities validation observed, so only one of them
//! can commit. The loser's order is discarded and it validates again against the new
//! stock, which usually ends in [`PlacementError::InsufficientStock`]. If stock keeps
//! moving, the placement gives up with [`PlacementError::CommitConflict`].
//!
//! ## Usage
//!
//! ```rust
//! use order_placement::lifecycle::OrderSystem;
//! use order_placement::model::{CustomerCreate, OrderLineRequest, ProductCreate};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = OrderSystem::new();
//!     let customer = CustomerCreate { name: "Alice".into(), email: "alice@example.com".into() };
//!     system.customer_client.register_with_id("C1".into(), customer).await?;
//!     let widget = ProductCreate {
//!         name: "Widget".into(),
//!         price: Decimal::new(1000, 2),
//!         quantity: 5,
//!     };
//!     system.product_client.create_product_with_id("P1".into(), widget).await?;
//!
//!     let order = system
//!         .create_order("C1".into(), vec![OrderLineRequest::new("P1", 3)])
//!         .await?;
//!     assert_eq!(order.lines[0].price, Decimal::new(1000, 2));
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod committer;
pub mod error;
pub mod validator;

pub use error::*;

use crate::model::{CreateOrderRequest, CustomerId, Order, OrderLineRequest};
use crate::ports::{CustomerReader, OrderStore, ProductCatalog};
use crate::product_actor::ProductError;
use tracing::{field, info, instrument, warn, Span};

/// Default number of validate-and-commit rounds before giving up on stock conflicts.
pub const DEFAULT_MAX_COMMIT_ATTEMPTS: u32 = 3;

/// The order-placement workflow over three storage ports.
#[derive(Clone)]
pub struct OrderPlacement<C, P, O> {
    customers: C,
    catalog: P,
    orders: O,
    max_commit_attempts: u32,
}

impl<C, P, O> OrderPlacement<C, P, O>
where
    C: CustomerReader,
    P: ProductCatalog,
    O: OrderStore,
{
    pub fn new(customers: C, catalog: P, orders: O) -> Self {
        Self {
            customers,
            catalog,
            orders,
            max_commit_attempts: DEFAULT_MAX_COMMIT_ATTEMPTS,
        }
    }

    /// At least one attempt is always made.
    pub fn with_max_commit_attempts(mut self, attempts: u32) -> Self {
        self.max_commit_attempts = attempts.max(1);
        self
    }

    pub fn max_commit_attempts(&self) -> u32 {
        self.max_commit_attempts
    }

    /// Places an order for `customer_id`.
    ///
    /// Duplicate product ids are merged (quantities summed) before anything else happens.
    /// Each product must have strictly more stock than requested.
    ///
    /// # Errors
    /// - [`PlacementError::InvalidRequest`] for an empty customer id, no lines or a zero quantity
    /// - [`PlacementError::CustomerNotFound`], [`PlacementError::ProductNotFound`],
    ///   [`PlacementError::InsufficientStock`] from validation, with no writes made
    /// - [`PlacementError::CommitConflict`] when every commit attempt lost a stock race
    /// - [`PlacementError::CommitIncomplete`] when a failed commit could not discard its order
    /// - storage errors from any stage, passed through
    #[instrument(skip(self, products), fields(customer_id = %customer_id, stage = field::Empty))]
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        products: Vec<OrderLineRequest>,
    ) -> Result<Order, PlacementError> {
        let span = Span::current();
        let lines = validator::normalize(&customer_id, products)?;

        let mut attempt = 0;
        loop {
            attempt += 1;

            span.record("stage", "validating");
            let validated =
                match validator::validate(&self.customers, &self.catalog, &customer_id, &lines)
                    .await
                {
                    Ok(validated) => validated,
                    Err(e) => {
                        warn!(attempt, error = %e, "Order rejected");
                        return Err(e);
                    }
                };

            span.record("stage", "building");
            let order_lines = builder::build_lines(&validated.lines);
            let observed = validated.observed();

            span.record("stage", "committing");
            let committed = committer::commit(
                &self.catalog,
                &self.orders,
                validated.customer,
                order_lines,
                &observed,
            )
            .await;

            match committed {
                Ok(order) => {
                    span.record("stage", "done");
                    info!(order_id = %order.id, total = %order.total(), attempt, "Order placed");
                    return Ok(order);
                }
                Err(PlacementError::Product(ProductError::StockConflict { .. }))
                    if attempt < self.max_commit_attempts =>
                {
                    warn!(attempt, "Stock changed since validation, retrying");
                }
                Err(PlacementError::Product(ProductError::StockConflict { .. })) => {
                    warn!(attempt, "Giving up on stock conflicts");
                    return Err(PlacementError::CommitConflict { attempts: attempt });
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Commit failed");
                    return Err(e);
                }
            }
        }
    }

    /// [`create_order`](Self::create_order) for an already-parsed request.
    pub async fn place(&self, request: CreateOrderRequest) -> Result<Order, PlacementError> {
        self.create_order(request.customer_id, request.products).await
    }
}
