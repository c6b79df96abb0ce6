use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for inventory items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// A shop supply (detergent, softener, bags) with its alert threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub low_threshold: u32,
}

impl InventoryItem {
    /// Alert condition: stock at or below the threshold.
    pub fn is_low(&self) -> bool {
        self.quantity <= self.low_threshold
    }
}

#[derive(Debug, Clone)]
pub struct InventoryCreate {
    pub name: String,
    pub quantity: u32,
    pub low_threshold: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub quantity: Option<u32>,
    pub low_threshold: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let mut item = InventoryItem {
            id: ItemId(1),
            name: "detergente".into(),
            quantity: 6,
            low_threshold: 5,
        };
        assert!(!item.is_low());
        item.quantity = 5;
        assert!(item.is_low());
    }
}
