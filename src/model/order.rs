/// Represents a customer order and its line items.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
///
/// The order owns its items, so the order row, every line and the total are
/// committed by one request to the actor and can never be seen half written.
use crate::model::ClientId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Highest daily sequence that still fits the four-digit suffix.
pub const MAX_DAILY_SEQUENCE: u32 = 9999;

/// Human-readable order number, `YYYYMMDD-NNNN`.
///
/// The date is the UTC creation date and `NNNN` the 1-based, zero-padded
/// position of the order within that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNumber {
    date: NaiveDate,
    sequence: u32,
}

impl OrderNumber {
    /// Returns `None` when `sequence` is outside `1..=9999`.
    pub fn new(date: NaiveDate, sequence: u32) -> Option<Self> {
        (1..=MAX_DAILY_SEQUENCE)
            .contains(&sequence)
            .then_some(Self { date, sequence })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:04}", self.date.format("%Y%m%d"), self.sequence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed order number: {0}")]
pub struct ParseOrderNumberError(pub String);

impl FromStr for OrderNumber {
    type Err = ParseOrderNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseOrderNumberError(s.to_string());
        let (date, sequence) = s.split_once('-').ok_or_else(malformed)?;
        if date.len() != 8 || sequence.len() != 4 {
            return Err(malformed());
        }
        let date = NaiveDate::parse_from_str(date, "%Y%m%d").map_err(|_| malformed())?;
        let sequence = sequence.parse::<u32>().map_err(|_| malformed())?;
        Self::new(date, sequence).ok_or_else(malformed)
    }
}

impl TryFrom<String> for OrderNumber {
    type Error = ParseOrderNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderNumber> for String {
    fn from(number: OrderNumber) -> Self {
        number.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Ready,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// A priced cart line, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub garment_type: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// A stored line item. `unit_price` is a snapshot taken at creation and does
/// not follow later price list edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub garment_type: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub number: OrderNumber,
    pub client_id: Option<ClientId>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub delivery_date: NaiveDate,
    pub total: Decimal,
    pub notes: String,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// UTC calendar day the order was taken.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub number: OrderNumber,
    pub client_id: Option<ClientId>,
    pub created_at: DateTime<Utc>,
    pub delivery_date: NaiveDate,
    pub notes: String,
    pub lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn order_number_formats_with_four_digit_sequence() {
        assert_eq!(OrderNumber::new(day(), 1).unwrap().to_string(), "20240315-0001");
        assert_eq!(OrderNumber::new(day(), 9999).unwrap().to_string(), "20240315-9999");
    }

    #[test]
    fn order_number_rejects_out_of_range_sequences() {
        assert!(OrderNumber::new(day(), 0).is_none());
        assert!(OrderNumber::new(day(), 10_000).is_none());
    }

    #[test]
    fn order_number_parses_its_own_format() {
        let number: OrderNumber = "20240315-0042".parse().unwrap();
        assert_eq!(number.date(), day());
        assert_eq!(number.sequence(), 42);

        for bad in ["20240315-42", "2024031-0042", "20241315-0001", "20240315-0000", "x"] {
            assert!(bad.parse::<OrderNumber>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn order_number_string_conversions() {
        let number = OrderNumber::new(day(), 7).unwrap();
        let text = String::from(number);
        assert_eq!(text, "20240315-0007");
        assert_eq!(OrderNumber::try_from(text), Ok(number));
    }

    #[test]
    fn status_tags() {
        assert_eq!("in_progress".parse::<OrderStatus>(), Ok(OrderStatus::InProgress));
        assert_eq!(OrderStatus::Ready.to_string(), "ready");
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
