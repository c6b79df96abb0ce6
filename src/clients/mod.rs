//! # Resource Clients
//!
//! Domain wrappers around the generic [`ResourceClient`](crate::framework::ResourceClient).
//! Each one speaks its resource's language (phone numbers, garment types,
//! order numbers), maps [`FrameworkError`](crate::framework::FrameworkError)
//! into the resource's own error enum and writes the audit entries for the
//! mutations it performs.

pub mod audit_log;
pub mod client_registry;
pub mod inventory_ledger;
pub mod order_store;
pub mod price_catalog;

pub use audit_log::AuditLog;
pub use client_registry::ClientRegistry;
pub use inventory_ledger::InventoryLedger;
pub use order_store::OrderStore;
pub use price_catalog::PriceCatalog;
