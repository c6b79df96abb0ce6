//! Generic resource-actor framework.
//!
//! Every keyed store in the shop (clients, price list, inventory, orders, audit
//! trail) is one [`ResourceActor`] owning its rows, driven through a cloneable
//! [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - trait a stored type implements (ids, DTOs, hooks, natural key)
//! - [`ResourceActor`] - the task that owns the rows and serialises requests
//! - [`ResourceClient`] - typed async handle for sending requests
//! - [`ActorClient`] - shared `get`/`delete` for the domain wrappers in [`crate::clients`]
//! - [`FrameworkError`] - plumbing errors plus `NotFound` and `Duplicate`
//!
//! # Testing
//!
//! See [`mock`] for utilities to test services without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
