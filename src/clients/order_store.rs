//! # Order Store
//!
//! Provides a high-level API over the `Order` actor: inserts, lookups by
//! number, per-day and per-client queries and status changes. Validation of
//! the cart and number assignment live in
//! [`OrderBuilder`](crate::builder::OrderBuilder); this wrapper only talks to
//! the store.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{ClientId, Order, OrderCreate, OrderId, OrderNumber, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderStore {
    inner: ResourceClient<Order>,
}

impl OrderStore {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Inserts an order. A taken order number is reported as
    /// [`OrderError::DuplicateNumber`] and leaves the store unchanged.
    #[instrument(skip(self, params), fields(order_number = %params.number))]
    pub async fn insert(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    pub async fn find_by_number(&self, number: &OrderNumber) -> Result<Option<Order>, OrderError> {
        self.inner
            .find_by_key(number.to_string())
            .await
            .map_err(Self::map_error)
    }

    /// Orders created on `date` (UTC), in insertion order.
    #[instrument(skip(self))]
    pub async fn created_on(&self, date: NaiveDate) -> Result<Vec<Order>, OrderError> {
        self.inner
            .query(move |order| order.created_on() == date)
            .await
            .map_err(Self::map_error)
    }

    pub async fn count_created_on(&self, date: NaiveDate) -> Result<usize, OrderError> {
        Ok(self.created_on(date).await?.len())
    }

    /// A client's orders, newest first.
    pub async fn for_client(&self, client_id: ClientId) -> Result<Vec<Order>, OrderError> {
        let mut orders = self
            .inner
            .query(move |order| order.client_id == Some(client_id))
            .await
            .map_err(Self::map_error)?;
        orders.reverse();
        Ok(orders)
    }

    pub async fn count_for_client(&self, client_id: ClientId) -> Result<usize, OrderError> {
        Ok(self.for_client(client_id).await?.len())
    }

    /// Every order, newest first.
    pub async fn all(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.inner.query(|_| true).await.map_err(Self::map_error)?;
        orders.reverse();
        Ok(orders)
    }

    pub async fn recent(&self, limit: usize) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.all().await?;
        orders.truncate(limit);
        Ok(orders)
    }

    /// Sets the status and returns the previous one with the updated order.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(OrderStatus, Order), OrderError> {
        debug!("Setting status of {} to {}", id, status);
        match self
            .inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::SetStatus { previous, order } => Ok((previous, order)),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderStore {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Duplicate(number) => OrderError::DuplicateNumber(number),
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other.into_entity_error(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
