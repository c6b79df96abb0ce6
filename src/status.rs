//! # Order Status
//!
//! Status changes commit first; the "ready" notification runs afterwards and
//! its outcome is reported next to the committed order. A failed notification
//! never undoes the status change.

use crate::clients::{AuditLog, ClientRegistry, OrderStore};
use crate::framework::ActorClient;
use crate::model::{tables, AuditAction, Order, OrderId, OrderStatus};
use crate::notify::{Channel, Notifier, NotifyError, Recipient};
use crate::order_actor::OrderError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// What happened to the notification attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The new status does not notify the client.
    NotRequired,
    Sent { message_id: String },
    /// Reported as a warning; the status change itself stands.
    Failed(NotifyError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub previous: OrderStatus,
    pub order: Order,
    pub notification: Notification,
}

impl StatusChange {
    pub fn warning(&self) -> Option<&NotifyError> {
        match &self.notification {
            Notification::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct StatusService {
    orders: OrderStore,
    clients: ClientRegistry,
    audit: AuditLog,
    notifier: Arc<dyn Notifier>,
    channel: Channel,
}

impl StatusService {
    pub fn new(
        orders: OrderStore,
        clients: ClientRegistry,
        audit: AuditLog,
        notifier: Arc<dyn Notifier>,
        channel: Channel,
    ) -> Self {
        Self {
            orders,
            clients,
            audit,
            notifier,
            channel,
        }
    }

    /// Sets any status on the order; transitions are not restricted.
    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        user: &str,
    ) -> Result<StatusChange, OrderError> {
        let (previous, order) = self.orders.set_status(id, status).await?;
        info!(order_number = %order.number, %previous, %status, "Status changed");
        self.audit
            .note(AuditAction::ChangeStatus, tables::ORDERS, id.to_string(), user)
            .await;

        let notification = if status == OrderStatus::Ready {
            self.notify_ready(&order, user).await
        } else {
            Notification::NotRequired
        };

        Ok(StatusChange {
            previous,
            order,
            notification,
        })
    }

    /// Parses a status tag (`pending`, `in_progress`, `ready`, `delivered`)
    /// before changing it.
    pub async fn change_status_tag(
        &self,
        id: OrderId,
        status: &str,
        user: &str,
    ) -> Result<StatusChange, OrderError> {
        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| OrderError::InvalidStatus(e.0))?;
        self.change_status(id, status, user).await
    }

    async fn notify_ready(&self, order: &Order, user: &str) -> Notification {
        let result = match self.recipient(order).await {
            Ok(recipient) => self.notifier.send(&recipient, self.channel).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(message_id) => {
                info!(order_number = %order.number, %message_id, "Client notified");
                self.audit
                    .note(AuditAction::SendNotification, tables::ORDERS, order.id.to_string(), user)
                    .await;
                Notification::Sent { message_id }
            }
            Err(e) => {
                warn!(order_number = %order.number, error = %e, "Notification not sent");
                Notification::Failed(e)
            }
        }
    }

    async fn recipient(&self, order: &Order) -> Result<Recipient, NotifyError> {
        let missing = || NotifyError::MissingRecipient(order.number.to_string());
        let client_id = order.client_id.ok_or_else(missing)?;
        let client = self
            .clients
            .get(client_id)
            .await
            .map_err(|e| NotifyError::RecipientLookup(e.to_string()))?
            .ok_or_else(missing)?;
        if client.phone.trim().is_empty() {
            return Err(missing());
        }
        Ok(Recipient {
            name: Some(client.name),
            phone: client.phone,
            order_number: order.number,
        })
    }
}
