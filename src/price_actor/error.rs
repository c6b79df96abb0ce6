//! Error types for the Price actor.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during price list operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Price entry not found: {0}")]
    NotFound(String),

    /// The garment type is already on the price list.
    #[error("Garment type {0} already has a price")]
    AlreadyExists(String),

    #[error("Unit price must not be negative, got {0}")]
    NegativePrice(Decimal),

    #[error("Price validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PriceError {
    fn from(msg: String) -> Self {
        PriceError::ActorCommunicationError(msg)
    }
}
