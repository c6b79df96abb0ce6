//! # Price Actor
//!
//! Holds the price list, one entry per garment type. Garment types are stored
//! normalized (see [`normalize_garment`](crate::model::normalize_garment)) and
//! act as the natural key.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::PriceEntry;

/// Creates a new Price actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<PriceEntry>, ResourceClient<PriceEntry>) {
    ResourceActor::new(buffer)
}
