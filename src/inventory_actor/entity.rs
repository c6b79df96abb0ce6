//! [`ActorEntity`] implementation for [`InventoryItem`].
//!
//! Includes the stock check and signed adjustment actions.

use super::actions::{InventoryAction, InventoryActionResult};
use super::InventoryError;
use crate::framework::ActorEntity;
use crate::model::{InventoryCreate, InventoryItem, InventoryUpdate, ItemId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = ItemId;
    type Create = InventoryCreate;
    type Update = InventoryUpdate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = ();
    type Error = InventoryError;

    fn from_create_params(id: ItemId, params: InventoryCreate) -> Result<Self, InventoryError> {
        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(InventoryError::Validation("item name is required".into()));
        }
        Ok(Self {
            id,
            name,
            quantity: params.quantity,
            low_threshold: params.low_threshold,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    /// # Fields Updated
    /// - `quantity`: absolute stock level
    /// - `low_threshold`: alert threshold
    async fn on_update(&mut self, update: InventoryUpdate, _ctx: &()) -> Result<(), InventoryError> {
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(low_threshold) = update.low_threshold {
            self.low_threshold = low_threshold;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _ctx: &(),
    ) -> Result<InventoryActionResult, InventoryError> {
        match action {
            InventoryAction::CheckStock => Ok(InventoryActionResult::CheckStock(self.quantity)),
            InventoryAction::Adjust(delta) => {
                let adjusted = i64::from(self.quantity) + delta;
                if adjusted < 0 {
                    return Err(InventoryError::InsufficientStock {
                        requested: delta.unsigned_abs(),
                        available: self.quantity,
                    });
                }
                self.quantity = u32::try_from(adjusted).map_err(|_| {
                    InventoryError::Validation(format!("stock level {adjusted} is too large"))
                })?;
                Ok(InventoryActionResult::Adjust(self.quantity))
            }
        }
    }
}
