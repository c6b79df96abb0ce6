//! Error types for the Audit actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuditError {
    #[error("Audit entry requires a username")]
    MissingUser,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AuditError {
    fn from(msg: String) -> Self {
        AuditError::ActorCommunicationError(msg)
    }
}
