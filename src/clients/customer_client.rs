use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use crate::ports::CustomerReader;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CustomerError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => CustomerError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => CustomerError::AlreadyExists(id),
            Err(other) => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn register(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Registers a customer under a caller-chosen id.
    #[instrument(skip(self, params))]
    pub async fn register_with_id(
        &self,
        id: CustomerId,
        params: CustomerCreate,
    ) -> Result<Customer, CustomerError> {
        debug!(?params, "Sending request");
        self.inner
            .create_with_id(id, params)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl CustomerReader for CustomerClient {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
        self.get(id.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::MockClient;

    fn alice() -> Customer {
        Customer::new(CustomerId::from("C1"), "Alice", "alice@example.com")
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(CustomerId::from("C1")).return_ok(Some(alice()));
        mock.expect_get(CustomerId::from("C9")).return_ok(None);

        let client = CustomerClient::new(mock.client());
        let found = client.find_by_id(&CustomerId::from("C1")).await.unwrap();
        assert_eq!(found, Some(alice()));
        let missing = client.find_by_id(&CustomerId::from("C9")).await.unwrap();
        assert_eq!(missing, None);

        mock.verify();
    }

    #[tokio::test]
    async fn test_errors_are_mapped() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_update(CustomerId::from("C9"))
            .return_err(FrameworkError::NotFound("C9".into()));
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                CustomerError::ValidationError("invalid email: nope".into()),
            )));
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("C1".into()));
        mock.expect_get(CustomerId::from("C1"))
            .return_err(FrameworkError::ActorClosed);

        let client = CustomerClient::new(mock.client());
        let updated = client
            .update_customer(CustomerId::from("C9"), CustomerUpdate::default())
            .await;
        assert_eq!(updated, Err(CustomerError::NotFound("C9".into())));

        let params = CustomerCreate {
            name: "Bob".into(),
            email: "nope".into(),
        };
        let registered = client.register(params.clone()).await;
        assert!(matches!(registered, Err(CustomerError::ValidationError(_))));

        let registered = client.register_with_id(CustomerId::from("C1"), params).await;
        assert_eq!(registered, Err(CustomerError::AlreadyExists("C1".into())));

        let found = client.find_by_id(&CustomerId::from("C1")).await;
        assert!(matches!(found, Err(CustomerError::ActorCommunicationError(_))));

        mock.verify();
    }
}
