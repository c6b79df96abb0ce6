//! # Order Builder
//!
//! Turns a [`NewOrder`] into a stored [`Order`]:
//!
//! 1. Price every cart line with a positive quantity against the
//!    [`PriceCatalog`]. Nothing is stored if no line survives.
//! 2. Resolve the optional client reference.
//! 3. Ask the [`Sequencer`] for a number and insert the order, lines and total
//!    in one request.
//! 4. If the number was taken in the meantime, ask for one fresh number and
//!    insert once more. A second collision is reported as
//!    [`OrderError::RetryExhausted`].
//! 5. Check the client is still registered. If it was removed while the
//!    order was being numbered, the order is withdrawn and the caller gets
//!    [`OrderError::ClientNotFound`].
//! 6. Append one `create_order` audit entry.

use crate::clients::{AuditLog, ClientRegistry, OrderStore, PriceCatalog};
use crate::clock::SharedClock;
use crate::framework::ActorClient;
use crate::model::{
    normalize_garment, tables, AuditAction, Cart, ClientId, Order, OrderCreate, OrderId,
    OrderLine,
};
use crate::order_actor::OrderError;
use crate::sequencer::Sequencer;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// How the caller identifies the client of a new order.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientRef {
    /// Must exist.
    Id(ClientId),
    /// An unregistered phone leaves the order without a client.
    Phone(String),
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub client: Option<ClientRef>,
    pub delivery_date: NaiveDate,
    pub notes: String,
    pub cart: Cart,
    pub acting_user: String,
}

#[derive(Clone)]
pub struct OrderBuilder {
    orders: OrderStore,
    prices: PriceCatalog,
    clients: ClientRegistry,
    audit: AuditLog,
    sequencer: Arc<dyn Sequencer>,
    clock: SharedClock,
    allow_unpriced: bool,
}

impl OrderBuilder {
    pub fn new(
        orders: OrderStore,
        prices: PriceCatalog,
        clients: ClientRegistry,
        audit: AuditLog,
        sequencer: Arc<dyn Sequencer>,
        clock: SharedClock,
    ) -> Self {
        Self {
            orders,
            prices,
            clients,
            audit,
            sequencer,
            clock,
            allow_unpriced: false,
        }
    }

    /// Price garments missing from the price list at zero instead of
    /// rejecting the order.
    pub fn allow_unpriced_garments(mut self, allow: bool) -> Self {
        self.allow_unpriced = allow;
        self
    }

    #[instrument(skip(self, request), fields(user = %request.acting_user))]
    pub async fn create(&self, request: NewOrder) -> Result<Order, OrderError> {
        let lines = self.price_lines(&request.cart).await?;
        let client_id = self.resolve_client(request.client.as_ref()).await?;
        let created_at = self.clock.now();

        let mut draft = OrderCreate {
            number: self.sequencer.next_number(created_at).await?,
            client_id,
            created_at,
            delivery_date: request.delivery_date,
            notes: request.notes,
            lines,
        };

        let id = match self.orders.insert(draft.clone()).await {
            Err(OrderError::DuplicateNumber(first)) => {
                warn!(order_number = %first, "Order number taken, retrying once");
                draft.number = self.sequencer.next_number(created_at).await?;
                match self.orders.insert(draft).await {
                    Err(OrderError::DuplicateNumber(second)) => {
                        error!(first = %first, second = %second, "Order number taken twice");
                        return Err(OrderError::RetryExhausted { first, second });
                    }
                    other => other?,
                }
            }
            other => other?,
        };
        self.confirm_client(id, client_id).await?;

        let order = self
            .orders
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        info!(order_id = %order.id, order_number = %order.number, total = %order.total, "Order created");
        self.audit
            .note(
                AuditAction::CreateOrder,
                tables::ORDERS,
                order.id.to_string(),
                &request.acting_user,
            )
            .await;
        Ok(order)
    }

    /// Drops lines with a quantity of zero or less and snapshots the current
    /// unit price of the rest.
    async fn price_lines(&self, cart: &Cart) -> Result<Vec<OrderLine>, OrderError> {
        let mut lines = Vec::with_capacity(cart.len());
        for (garment, requested) in cart.iter() {
            if requested <= 0 {
                debug!(garment, requested, "Skipping empty line");
                continue;
            }
            let quantity = u32::try_from(requested).map_err(|_| OrderError::InvalidQuantity {
                garment: garment.to_string(),
                quantity: requested,
            })?;
            let unit_price = match self.prices.price_of(garment).await? {
                Some(price) => price,
                None if self.allow_unpriced => {
                    warn!(garment, "Garment not on the price list, pricing at zero");
                    Decimal::ZERO
                }
                None => return Err(OrderError::UnknownGarment(garment.to_string())),
            };
            lines.push(OrderLine {
                garment_type: normalize_garment(garment),
                quantity,
                unit_price,
            });
        }

        if lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        Ok(lines)
    }

    /// Re-reads the client after the insert. A delete that ran between
    /// [`Self::resolve_client`] and the insert saw no orders for the client,
    /// so the order is withdrawn instead of pointing at a missing client.
    /// A delete that runs after the insert is refused by the client actor.
    async fn confirm_client(
        &self,
        id: OrderId,
        client_id: Option<ClientId>,
    ) -> Result<(), OrderError> {
        let Some(client_id) = client_id else {
            return Ok(());
        };
        if self.clients.get(client_id).await?.is_some() {
            return Ok(());
        }

        warn!(order_id = %id, client_id = %client_id, "Client removed during intake, withdrawing order");
        self.orders.delete(id).await?;
        Err(OrderError::ClientNotFound(client_id.to_string()))
    }

    async fn resolve_client(
        &self,
        client: Option<&ClientRef>,
    ) -> Result<Option<ClientId>, OrderError> {
        match client {
            None => Ok(None),
            Some(ClientRef::Id(id)) => match self.clients.get(*id).await? {
                Some(client) => Ok(Some(client.id)),
                None => Err(OrderError::ClientNotFound(id.to_string())),
            },
            Some(ClientRef::Phone(phone)) => {
                let client = self.clients.find_by_phone(phone).await?;
                if client.is_none() {
                    debug!(phone = %phone, "Phone not registered, order has no client");
                }
                Ok(client.map(|c| c.id))
            }
        }
    }
}
