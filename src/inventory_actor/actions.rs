//! Custom actions for the Inventory actor.

/// Stock operations beyond plain edits.
#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Adds a signed delta to the stock level.
    ///
    /// # Errors
    /// Fails if the result would be negative.
    Adjust(i64),
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    CheckStock(u32),
    /// The stock level after the adjustment.
    Adjust(u32),
}
