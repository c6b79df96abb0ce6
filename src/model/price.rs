//! Price list entries: one unit price per garment type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for price list entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PriceId(pub u32);

impl From<u32> for PriceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PriceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "price_{}", self.0)
    }
}

/// Garment family used to group the price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Casual,
    Formal,
    Sportswear,
    Underwear,
    Bedding,
    Linens,
    Uniforms,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Casual,
        Category::Formal,
        Category::Sportswear,
        Category::Underwear,
        Category::Bedding,
        Category::Linens,
        Category::Uniforms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Casual => "casual",
            Category::Formal => "formal",
            Category::Sportswear => "sportswear",
            Category::Underwear => "underwear",
            Category::Bedding => "bedding",
            Category::Linens => "linens",
            Category::Uniforms => "uniforms",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub id: PriceId,
    pub garment_type: String,
    pub unit_price: Decimal,
    pub category: Category,
}

/// Payload for adding a garment type to the price list.
#[derive(Debug, Clone)]
pub struct PriceCreate {
    pub garment_type: String,
    pub unit_price: Decimal,
    pub category: Category,
}

/// Payload for editing a price list entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub garment_type: Option<String>,
    pub unit_price: Option<Decimal>,
    pub category: Option<Category>,
}

/// Canonical spelling of a garment type: trimmed and lower-cased, so
/// `" Camisa Casual"` and `"camisa casual"` name the same entry.
pub fn normalize_garment(garment_type: &str) -> String {
    garment_type.trim().to_lowercase()
}
