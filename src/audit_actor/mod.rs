//! # Audit Actor
//!
//! Append-only log of who changed what. Entries can be created and read but
//! never updated: both `Update` and `Action` are uninhabited.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::AuditEntry;

/// Creates a new Audit actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<AuditEntry>, ResourceClient<AuditEntry>) {
    ResourceActor::new(buffer)
}
