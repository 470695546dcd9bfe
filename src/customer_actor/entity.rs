//! [`ActorEntity`] implementation for [`Customer`].

use super::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

fn validate_email(email: &str) -> Result<(), CustomerError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(CustomerError::ValidationError(format!(
            "invalid email: {}",
            email
        )))
    }
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(CustomerError::ValidationError("name is empty".to_string()));
        }
        validate_email(&params.email)?;
        Ok(Self::new(id, params.name, params.email))
    }

    /// # Fields Updated
    /// - `name`: display name
    /// - `email`: contact address, must contain `@`
    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
