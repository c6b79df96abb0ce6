//! Error types for the Client actor.

use thiserror::Error;

/// Errors that can occur during client operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// The requested client was not found.
    #[error("Client not found: {0}")]
    NotFound(String),

    /// Another client already uses this phone number.
    #[error("A client with phone {0} already exists")]
    AlreadyExists(String),

    /// A required field is missing or blank.
    #[error("Client validation error: {0}")]
    Validation(String),

    /// The client is still referenced by orders and cannot be deleted.
    #[error("Client {client} is referenced by {orders} order(s)")]
    InUse { client: String, orders: usize },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ClientError {
    fn from(msg: String) -> Self {
        ClientError::ActorCommunicationError(msg)
    }
}
