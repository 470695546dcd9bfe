//! # Storage Ports
//!
//! The three capabilities the placement workflow needs from storage. The actor clients in
//! [`clients`](crate::clients) implement them; tests can plug in anything else.
//!
//! | Port | Implemented by |
//! |---|---|
//! | [`CustomerReader`] | [`CustomerClient`](crate::clients::CustomerClient) |
//! | [`ProductCatalog`] | [`ProductClient`](crate::clients::ProductClient) |
//! | [`OrderStore`] | [`OrderClient`](crate::clients::OrderClient) |

use crate::customer_actor::CustomerError;
use crate::model::{
    Customer, CustomerId, Order, OrderCreate, OrderId, Product, ProductId, StockUpdate,
};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerReader: Send + Sync {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;
}

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Products matching `ids`. Unknown ids are silently omitted, so callers detect a
    /// shortfall by comparing what came back with what they asked for.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError>;

    /// Writes every update or none of them.
    ///
    /// Each entry is a compare-and-set on one product's quantity. If any stored quantity
    /// differs from its `expected` value the call fails with
    /// [`ProductError::StockConflict`] and nothing is written.
    async fn update_quantity(&self, updates: Vec<StockUpdate>) -> Result<(), ProductError>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order; the store assigns its id.
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError>;

    /// Removes an order whose placement could not be completed.
    async fn discard(&self, id: &OrderId) -> Result<(), OrderError>;
}
