//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod audit;
pub mod cart;
pub mod client;
pub mod inventory;
pub mod order;
pub mod price;

pub use audit::*;
pub use cart::*;
pub use client::*;
pub use inventory::*;
pub use order::*;
pub use price::*;
