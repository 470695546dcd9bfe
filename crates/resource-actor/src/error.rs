//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, plus a boxed slot for the entity's own
//! error type.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed error an entity hook returned.
    ///
    /// Returns `Err(self)` unchanged when this is not an `EntityError`, or when the boxed
    /// error is of a different type.
    ///
    /// ```
    /// use resource_actor::FrameworkError;
    ///
    /// #[derive(Debug, thiserror::Error, PartialEq)]
    /// #[error("out of stock")]
    /// struct OutOfStock;
    ///
    /// let err = FrameworkError::EntityError(Box::new(OutOfStock));
    /// assert_eq!(err.into_entity_error::<OutOfStock>().unwrap(), OutOfStock);
    ///
    /// let err = FrameworkError::ActorClosed;
    /// assert!(err.into_entity_error::<OutOfStock>().is_err());
    /// ```
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
