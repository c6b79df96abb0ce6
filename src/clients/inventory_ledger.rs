//! # Inventory Ledger
//!
//! Provides a high-level API for interacting with the `InventoryItem` actor.
use crate::clients::AuditLog;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError};
use crate::model::{tables, AuditAction, InventoryCreate, InventoryItem, InventoryUpdate, ItemId};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Inventory actor.
#[derive(Clone)]
pub struct InventoryLedger {
    inner: ResourceClient<InventoryItem>,
    audit: AuditLog,
}

impl InventoryLedger {
    pub fn new(inner: ResourceClient<InventoryItem>, audit: AuditLog) -> Self {
        Self { inner, audit }
    }

    #[instrument(skip(self))]
    pub async fn add(
        &self,
        name: &str,
        quantity: u32,
        low_threshold: u32,
        user: &str,
    ) -> Result<ItemId, InventoryError> {
        debug!("Sending request");
        let id = self.insert(name, quantity, low_threshold).await?;
        self.audit
            .note(AuditAction::CreateInventory, tables::INVENTORY, id.to_string(), user)
            .await;
        Ok(id)
    }

    async fn insert(
        &self,
        name: &str,
        quantity: u32,
        low_threshold: u32,
    ) -> Result<ItemId, InventoryError> {
        self.inner
            .create(InventoryCreate {
                name: name.to_string(),
                quantity,
                low_threshold,
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn edit(
        &self,
        id: ItemId,
        update: InventoryUpdate,
        user: &str,
    ) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        let item = self.inner.update(id, update).await.map_err(Self::map_error)?;
        self.audit
            .note(AuditAction::EditInventory, tables::INVENTORY, id.to_string(), user)
            .await;
        Ok(item)
    }

    /// Check the current stock level for an item.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ItemId) -> Result<u32, InventoryError> {
        debug!("Checking stock for item {}", id);
        match self
            .inner
            .perform_action(id, InventoryAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::CheckStock(level) => Ok(level),
            other => Err(InventoryError::ActorCommunicationError(format!(
                "CheckStock answered with {other:?}"
            ))),
        }
    }

    /// Apply a signed stock change and return the new level.
    ///
    /// Fails with [`InventoryError::InsufficientStock`] rather than going
    /// below zero.
    #[instrument(skip(self))]
    pub async fn adjust(&self, id: ItemId, delta: i64, user: &str) -> Result<u32, InventoryError> {
        debug!("Adjusting item {} by {}", id, delta);
        let level = match self
            .inner
            .perform_action(id, InventoryAction::Adjust(delta))
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::Adjust(level) => level,
            other => {
                return Err(InventoryError::ActorCommunicationError(format!(
                    "Adjust answered with {other:?}"
                )))
            }
        };
        self.audit
            .note(AuditAction::AdjustInventory, tables::INVENTORY, id.to_string(), user)
            .await;
        Ok(level)
    }

    /// Every item, by name.
    pub async fn list(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        let mut items = self.inner.query(|_| true).await.map_err(Self::map_error)?;
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// Items at or below their threshold, by name.
    pub async fn low_stock(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        let mut items = self
            .inner
            .query(InventoryItem::is_low)
            .await
            .map_err(Self::map_error)?;
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// Inserts the `(name, quantity, threshold)` rows that do not exist yet.
    #[instrument(skip(self, defaults))]
    pub async fn seed(&self, defaults: &[(&str, u32, u32)]) -> Result<usize, InventoryError> {
        let mut inserted = 0;
        for (name, quantity, low_threshold) in defaults {
            match self.insert(name, *quantity, *low_threshold).await {
                Ok(_) => inserted += 1,
                Err(InventoryError::AlreadyExists(_)) => {}
                Err(e) => return Err(e),
            }
        }
        info!(inserted, "Inventory seeded");
        Ok(inserted)
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryLedger {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Duplicate(name) => InventoryError::AlreadyExists(name),
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            other => other
                .into_entity_error(|e| InventoryError::ActorCommunicationError(e.to_string())),
        }
    }
}
