//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, independent of any resource.
//! Resource wrappers translate these into their own error enums.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The natural key is already owned by another row.
    #[error("Duplicate key: {0}")]
    Duplicate(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the resource's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Hook errors cross the channel boxed; wrappers call this to get the typed
    /// error back. Any other variant (or a foreign error) is handed to `fallback`.
    pub fn into_entity_error<E>(self, fallback: impl FnOnce(FrameworkError) -> E) -> E
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => *typed,
                Err(other) => fallback(FrameworkError::EntityError(other)),
            },
            other => fallback(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("boom: {0}")]
    struct Boom(u8);

    #[test]
    fn entity_error_downcasts_to_original_type() {
        let err = FrameworkError::EntityError(Box::new(Boom(7)));
        let recovered: Boom = err.into_entity_error(|_| Boom(0));
        assert_eq!(recovered, Boom(7));
    }

    #[test]
    fn other_variants_use_fallback() {
        let err = FrameworkError::Duplicate("8091234567".into());
        let recovered: Boom = err.into_entity_error(|e| {
            assert!(matches!(e, FrameworkError::Duplicate(_)));
            Boom(1)
        });
        assert_eq!(recovered, Boom(1));
    }
}
