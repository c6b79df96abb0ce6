//! # Client Actor
//!
//! Holds the client registry. Phone numbers are the natural key, so a second
//! registration with the same phone fails with [`ClientError::AlreadyExists`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Client`]
//! - [`error`] - [`ClientError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! The actor's context is an [`OrderStore`](crate::clients::OrderStore): a delete
//! is vetoed while any order still references the client.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Client;

/// Creates a new Client actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Client>, ResourceClient<Client>) {
    ResourceActor::new(buffer)
}
