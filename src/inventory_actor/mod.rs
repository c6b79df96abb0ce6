//! # Inventory Actor
//!
//! Supply stock levels with low-stock thresholds. Item names are unique.
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Read the current level
//! let level = ledger.check_stock(item_id).await?;
//!
//! // Consume or restock; never drives the quantity below zero
//! let level = ledger.adjust(item_id, -3, "admin").await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::InventoryItem;

/// Creates a new Inventory actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<InventoryItem>, ResourceClient<InventoryItem>) {
    ResourceActor::new(buffer)
}
