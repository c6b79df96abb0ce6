//! # Generic Messages
//!
//! The request enum exchanged between [`ResourceClient`](super::ResourceClient)
//! and [`ResourceActor`](super::ResourceActor).

use super::entity::ActorEntity;
use super::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Row predicate evaluated inside the actor for `Query` requests.
pub struct Filter<T>(pub Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Filter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(predicate))
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map to the persistence operations every keyed store needs:
///
/// - **Create**: insert with natural-key uniqueness check.
/// - **Get**: read by row id.
/// - **FindByKey**: read by natural key (phone number, garment type, order number).
/// - **Query**: read every row matching a predicate ("orders created today",
///   "items at or below their threshold").
/// - **Update**: staged mutation through [`ActorEntity::Update`].
/// - **Delete**: removal, subject to the `on_delete` veto.
/// - **Action**: a custom [`ActorEntity::Action`] applied to a staged copy.
///
/// Every request is handled to completion before the next one is read, so
/// each is its own atomic commit.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindByKey {
        key: String,
        respond_to: Response<Option<T>>,
    },
    Query {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
