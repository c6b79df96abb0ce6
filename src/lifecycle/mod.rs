//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the shop's actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them in
//! `run(context)`. Only the client actor has one: it gets an
//! [`OrderStore`](crate::clients::OrderStore) so it can refuse to delete a
//! client that orders still reference.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients and services** - closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for all actor tasks to finish
//!
//! The order actor stops last in practice: the client actor's context holds
//! an order store clone until the client actor itself exits. The dependency
//! graph is acyclic, so channel closure is enough.

pub mod seed;
pub mod shop_system;
pub mod tracing;

pub use shop_system::*;
pub use tracing::*;
