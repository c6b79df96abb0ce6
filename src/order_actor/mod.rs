//! # Order Actor
//!
//! Stores orders together with their line items. The order number is the
//! natural key, so inserting a number that is already taken fails with
//! [`OrderError::DuplicateNumber`]; the
//! [`OrderBuilder`](crate::builder::OrderBuilder) reacts to that by asking the
//! sequencer for a fresh number once.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] for status changes
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer)
}
