//! Error types for the Order actor and the order workflow around it.

use crate::client_actor::ClientError;
use crate::price_actor::PriceError;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The cart resolved to zero valid lines.
    #[error("Order has no items")]
    EmptyCart,

    /// A cart line names a garment type missing from the price list.
    #[error("Garment type not on the price list: {0}")]
    UnknownGarment(String),

    #[error("Invalid quantity {quantity} for {garment}")]
    InvalidQuantity { garment: String, quantity: i64 },

    /// The referenced client id does not exist.
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    #[error("Unknown order status: {0}")]
    InvalidStatus(String),

    /// The order number is already taken.
    #[error("Order number {0} is already taken")]
    DuplicateNumber(String),

    /// The retry after a number collision collided again.
    #[error("Order numbers {first} and {second} were both taken")]
    RetryExhausted { first: String, second: String },

    /// All four-digit sequences for the day are used.
    #[error("No order numbers left for {0}")]
    SequenceExhausted(NaiveDate),

    #[error("Order validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Catalog(#[from] PriceError),

    #[error(transparent)]
    Registry(#[from] ClientError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
