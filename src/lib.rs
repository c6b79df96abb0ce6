//! # Laundry Desk
//!
//! Back office of a laundry shop: client records, the garment price list,
//! supplies with low-stock alerts, order intake with line items, status
//! tracking with "ready" notifications, reports and an audit trail.
//!
//! ## Core Concepts
//!
//! Every keyed store is a `ResourceActor<T: ActorEntity>`: one Tokio task that
//! owns the rows of one entity type and handles requests one at a time. Each
//! request is therefore its own atomic commit, and natural keys (phone numbers,
//! garment types, order numbers) are checked inside the actor, so a duplicate
//! comes back as a distinguishable error instead of a generic failure.
//!
//! ### Order numbers
//! Orders are numbered `YYYYMMDD-NNNN`, the UTC creation date plus the
//! zero-padded position within that day. The [`sequencer`] proposes a number
//! from the day's count, the [`builder`] inserts the order and, when a
//! concurrent request took the number first, asks for one fresh number and
//! tries once more.
//!
//! ### Errors
//! Each actor defines its own `thiserror` enum (`ClientError`, `PriceError`,
//! `InventoryError`, `OrderError`, `AuditError`). Hook errors cross the
//! channel boxed and are downcast back by the wrappers in [`clients`], so
//! callers match on e.g. [`OrderError::EmptyCart`](order_actor::OrderError::EmptyCart).
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, client, entity trait and the mocking utilities.
//!
//! ### 2. The Entities ([`model`] and the `*_actor` modules)
//! Pure data plus their [`ActorEntity`](framework::ActorEntity) implementations.
//!
//! ### 3. The Interface ([`clients`])
//! Domain wrappers: [`ClientRegistry`](clients::ClientRegistry),
//! [`PriceCatalog`](clients::PriceCatalog), [`InventoryLedger`](clients::InventoryLedger),
//! [`OrderStore`](clients::OrderStore), [`AuditLog`](clients::AuditLog).
//!
//! ### 4. The Services
//! [`builder`], [`sequencer`], [`status`], [`notify`], [`reports`].
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`ShopSystem`](lifecycle::ShopSystem) starts, wires, seeds and stops
//! everything; [`config`] loads its settings.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod audit_actor;
pub mod builder;
pub mod client_actor;
pub mod clients;
pub mod clock;
pub mod config;
pub mod framework;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod price_actor;
pub mod reports;
pub mod sequencer;
pub mod status;
