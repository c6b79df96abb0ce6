//! Append-only audit trail entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for audit entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuditId(pub u32);

impl From<u32> for AuditId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AuditId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "audit_{}", self.0)
    }
}

/// Table names recorded in audit entries.
pub mod tables {
    pub const CLIENTS: &str = "clients";
    pub const PRICES: &str = "price_list";
    pub const INVENTORY: &str = "inventory";
    pub const ORDERS: &str = "orders";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    CreateClient,
    EditClient,
    DeleteClient,
    CreatePrice,
    EditPrice,
    CreateInventory,
    EditInventory,
    AdjustInventory,
    CreateOrder,
    ChangeStatus,
    SendNotification,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::CreateClient => "create_client",
            AuditAction::EditClient => "edit_client",
            AuditAction::DeleteClient => "delete_client",
            AuditAction::CreatePrice => "create_price",
            AuditAction::EditPrice => "edit_price",
            AuditAction::CreateInventory => "create_inventory",
            AuditAction::EditInventory => "edit_inventory",
            AuditAction::AdjustInventory => "adjust_inventory",
            AuditAction::CreateOrder => "create_order",
            AuditAction::ChangeStatus => "change_status",
            AuditAction::SendNotification => "send_notification",
        }
    }
}

impl Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: AuditId,
    pub action: AuditAction,
    pub table: String,
    pub row_id: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AuditCreate {
    pub action: AuditAction,
    pub table: String,
    pub row_id: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
