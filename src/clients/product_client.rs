//! # Product Client
//!
//! High-level API for the `Product` actor, and the
//! [`ProductCatalog`](crate::ports::ProductCatalog) port used by the placement workflow.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, StockUpdate};
use crate::ports::ProductCatalog;
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<ProductError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => ProductError::AlreadyExists(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Adds a product under a caller-chosen id.
    #[instrument(skip(self))]
    pub async fn create_product_with_id(
        &self,
        id: ProductId,
        params: ProductCreate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .create_with_id(id, params)
            .await
            .map_err(Self::map_error)
    }

    /// Changes price and/or stock. Price changes never touch placed orders.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result for CheckStock: {:?}",
                other
            ))),
        }
    }

    /// Applies every guarded stock write as one batch on the actor.
    ///
    /// Either all quantities are written or none is. The first product whose stored level
    /// differs from `expected` fails the batch with [`ProductError::StockConflict`].
    #[instrument(skip(self))]
    pub async fn set_quantities(&self, updates: Vec<StockUpdate>) -> Result<(), ProductError> {
        if updates.is_empty() {
            return Ok(());
        }
        debug!(count = updates.len(), "Setting quantities");
        let actions = updates
            .into_iter()
            .map(|update| {
                (
                    update.product_id,
                    ProductAction::SetQuantity {
                        expected: update.expected,
                        quantity: update.quantity,
                    },
                )
            })
            .collect();

        let results = self
            .inner
            .perform_batch_action(actions)
            .await
            .map_err(Self::map_error)?;
        match results
            .into_iter()
            .find(|result| !matches!(result, ProductActionResult::SetQuantity(())))
        {
            None => Ok(()),
            Some(other) => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result for SetQuantity: {:?}",
                other
            ))),
        }
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    #[instrument(skip(self))]
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .get_many(ids.to_vec())
            .await
            .map_err(Self::map_error)
    }

    async fn update_quantity(&self, updates: Vec<StockUpdate>) -> Result<(), ProductError> {
        self.set_quantities(updates).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_action, expect_batch_action, MockClient};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task =
            tokio::spawn(async move { product_client.check_stock(ProductId::from("P1")).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId::from("P1"));
        assert_eq!(action, ProductAction::CheckStock);

        responder
            .send(Ok(ProductActionResult::CheckStock(42)))
            .unwrap();

        assert_eq!(check_task.await.unwrap(), Ok(42));
    }

    #[tokio::test]
    async fn test_set_quantities_sends_one_batch() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let set_task = tokio::spawn(async move {
            product_client
                .set_quantities(vec![
                    StockUpdate {
                        product_id: ProductId::from("P1"),
                        expected: 5,
                        quantity: 2,
                    },
                    StockUpdate {
                        product_id: ProductId::from("P2"),
                        expected: 10,
                        quantity: 9,
                    },
                ])
                .await
        });

        let (actions, responder) = expect_batch_action(&mut receiver)
            .await
            .expect("Expected BatchAction request");
        assert_eq!(
            actions,
            vec![
                (
                    ProductId::from("P1"),
                    ProductAction::SetQuantity {
                        expected: 5,
                        quantity: 2
                    }
                ),
                (
                    ProductId::from("P2"),
                    ProductAction::SetQuantity {
                        expected: 10,
                        quantity: 9
                    }
                ),
            ]
        );
        responder
            .send(Ok(vec![
                ProductActionResult::SetQuantity(()),
                ProductActionResult::SetQuantity(()),
            ]))
            .unwrap();

        assert_eq!(set_task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_stock_conflict_keeps_its_type() {
        let conflict = ProductError::StockConflict {
            product_id: "P1".into(),
            expected: 5,
            actual: 4,
        };
        let mut mock = MockClient::<Product>::new();
        mock.expect_batch_action()
            .return_err(FrameworkError::EntityError(Box::new(conflict.clone())));

        let client = ProductClient::new(mock.client());
        let result = client
            .update_quantity(vec![StockUpdate {
                product_id: ProductId::from("P1"),
                expected: 5,
                quantity: 2,
            }])
            .await;
        assert_eq!(result, Err(conflict));

        // Nothing to write, nothing sent.
        assert_eq!(client.update_quantity(vec![]).await, Ok(()));

        mock.verify();
    }

    #[tokio::test]
    async fn test_find_all_by_id_returns_what_the_actor_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get_many().return_ok(vec![Product::new(
            ProductId::from("P1"),
            "Widget",
            dec!(10.00),
            5,
        )]);
        mock.expect_get_many().return_err(FrameworkError::ActorClosed);

        let client = ProductClient::new(mock.client());
        let ids = [ProductId::from("P1"), ProductId::from("P404")];
        let found = client.find_all_by_id(&ids).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, ProductId::from("P1"));

        let closed = client.find_all_by_id(&ids).await;
        assert!(matches!(closed, Err(ProductError::ActorCommunicationError(_))));

        mock.verify();
    }
}
