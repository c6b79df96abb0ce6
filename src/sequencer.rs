//! # Order Sequencer
//!
//! Issues candidate order numbers of the form `YYYYMMDD-NNNN`.
//!
//! [`DailySequencer`] counts the orders already created on the current UTC
//! date and proposes `count + 1`. Counting and inserting are separate
//! requests, so two concurrent callers can be handed the same number; the
//! order store's uniqueness check catches that and the
//! [`OrderBuilder`](crate::builder::OrderBuilder) asks for one more number.

use crate::clients::OrderStore;
use crate::model::OrderNumber;
use crate::order_actor::OrderError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

#[async_trait]
pub trait Sequencer: Send + Sync {
    /// Proposes the next number for an order created at `now`.
    async fn next_number(&self, now: DateTime<Utc>) -> Result<OrderNumber, OrderError>;
}

#[derive(Clone)]
pub struct DailySequencer {
    orders: OrderStore,
}

impl DailySequencer {
    pub fn new(orders: OrderStore) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl Sequencer for DailySequencer {
    /// # Errors
    /// [`OrderError::SequenceExhausted`] once 9999 orders exist for the day.
    #[instrument(skip(self))]
    async fn next_number(&self, now: DateTime<Utc>) -> Result<OrderNumber, OrderError> {
        let date = now.date_naive();
        let taken = self.orders.count_created_on(date).await?;
        let number = u32::try_from(taken + 1)
            .ok()
            .and_then(|sequence| OrderNumber::new(date, sequence))
            .ok_or(OrderError::SequenceExhausted(date))?;
        debug!(order_number = %number, taken, "Proposed order number");
        Ok(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{Order, OrderId, OrderStatus};
    use chrono::{NaiveDate, TimeZone};
    use rust_decimal::Decimal;

    fn placed_on(now: DateTime<Utc>, count: u32) -> Vec<Order> {
        (1..=count)
            .map(|n| Order {
                id: OrderId(n),
                number: OrderNumber::new(now.date_naive(), n).unwrap(),
                client_id: None,
                status: OrderStatus::Pending,
                created_at: now,
                delivery_date: now.date_naive(),
                total: Decimal::ZERO,
                notes: String::new(),
                items: vec![],
            })
            .collect()
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn first_order_of_the_day_is_0001() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_query().return_ok(vec![]);
        let sequencer = DailySequencer::new(OrderStore::new(mock.client()));

        let number = sequencer.next_number(noon()).await.unwrap();
        assert_eq!(number.to_string(), "20240315-0001");
        mock.verify();
    }

    #[tokio::test]
    async fn sequence_follows_the_daily_count() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_query().return_ok(placed_on(noon(), 41));
        let sequencer = DailySequencer::new(OrderStore::new(mock.client()));

        let number = sequencer.next_number(noon()).await.unwrap();
        assert_eq!(number.sequence(), 42);
        assert_eq!(number.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[tokio::test]
    async fn day_ten_thousand_is_refused() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_query().return_ok(placed_on(noon(), 9999));
        let sequencer = DailySequencer::new(OrderStore::new(mock.client()));

        let err = sequencer.next_number(noon()).await.unwrap_err();
        assert_eq!(err, OrderError::SequenceExhausted(noon().date_naive()));
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_query().return_err(FrameworkError::ActorClosed);
        let sequencer = DailySequencer::new(OrderStore::new(mock.client()));

        let err = sequencer.next_number(noon()).await.unwrap_err();
        assert!(matches!(err, OrderError::ActorCommunicationError(_)));
    }
}
