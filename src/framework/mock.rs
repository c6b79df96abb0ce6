//! # Mock Framework
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of a running actor. Services
//! that sit on top of several stores (the order builder, the status service,
//! the sequencer) can be tested with one real actor and the rest mocked, or
//! with no actors at all.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, scripted replies | Real rows |
//! | **Error Injection** | `return_err(...)` | Needs a matching store state |
//! | **Use Case** | Logic *around* a client | The entity hooks themselves |
//!
//! ```rust
//! use laundry_desk::framework::mock::MockClient;
//! use laundry_desk::framework::FrameworkError;
//! use laundry_desk::model::{Client, ClientId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Client>::new();
//!     mock.expect_get(ClientId(1)).return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().get(ClientId(1)).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For step-by-step assertions on the requests themselves use
//! [`create_mock_client`] with [`expect_create`], [`expect_get`],
//! [`expect_query`] and [`expect_action`].

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::{Filter, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted reply, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    FindByKey {
        key: String,
        response: Result<Option<T>, FrameworkError>,
    },
    Query {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push_back(expectation);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were registered, and
/// ids/keys must match; anything else panics the mock task, which surfaces in
/// the caller as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::FindByKey { key, respond_to },
                        Some(Expectation::FindByKey { key: expected, response }),
                    ) => {
                        assert_eq!(key, expected, "find_by_key called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Query { respond_to, .. },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ReplyBuilder<T, Option<T>> {
        self.reply(move |response| Expectation::Get { id, response })
    }

    pub fn expect_find_by_key(&mut self, key: impl Into<String>) -> ReplyBuilder<T, Option<T>> {
        let key = key.into();
        self.reply(move |response| Expectation::FindByKey { key, response })
    }

    pub fn expect_query(&mut self) -> ReplyBuilder<T, Vec<T>> {
        self.reply(|response| Expectation::Query { response })
    }

    pub fn expect_create(&mut self) -> ReplyBuilder<T, T::Id> {
        self.reply(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ReplyBuilder<T, T> {
        self.reply(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ReplyBuilder<T, ()> {
        self.reply(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ReplyBuilder<T, T::ActionResult> {
        self.reply(move |response| Expectation::Action { id, response })
    }

    fn reply<R: 'static>(
        &mut self,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ReplyBuilder<T, R> {
        ReplyBuilder {
            build: Box::new(build),
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an expectation with the reply the mock should send.
pub struct ReplyBuilder<T: ActorEntity, R> {
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ReplyBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        push(&self.expectations, (self.build)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, (self.build)(Err(error)));
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test pulls each request with one of the `expect_*` helpers below,
/// asserts on its payload and answers through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message must be a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message must be a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be a Query request. The filter is returned so the test
/// can check which rows it selects.
pub async fn expect_query<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Filter<T>, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Next message must be an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Supply {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    struct SupplyCreate {
        name: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("supply error")]
    struct SupplyError;

    #[async_trait]
    impl ActorEntity for Supply {
        type Id = u32;
        type Create = SupplyCreate;
        type Update = ();
        type Action = ();
        type ActionResult = ();
        type Context = ();
        type Error = SupplyError;

        fn from_create_params(id: u32, params: SupplyCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
            })
        }

        async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn supply(id: u32, name: &str) -> Supply {
        Supply {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Supply>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(SupplyCreate {
                    name: "detergente".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "detergente");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_query_filter_is_inspectable() {
        let (client, mut receiver) = create_mock_client::<Supply>(10);

        let task = tokio::spawn(async move { client.query(|s: &Supply| s.name == "bolsas").await });

        let (filter, responder) = expect_query(&mut receiver).await.expect("Expected Query");
        assert!(filter.matches(&supply(1, "bolsas")));
        assert!(!filter.matches(&supply(2, "suavizante")));
        responder.send(Ok(vec![supply(1, "bolsas")])).unwrap();

        assert_eq!(task.await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Supply>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(supply(1, "detergente")));
        mock.expect_find_by_key("bolsas").return_ok(None);
        mock.expect_query().return_ok(vec![supply(1, "detergente")]);
        mock.expect_delete(1).return_ok(());
        mock.expect_delete(2)
            .return_err(FrameworkError::NotFound("2".into()));

        let client = mock.client();

        let id = client
            .create(SupplyCreate {
                name: "detergente".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().name, "detergente");
        assert!(client.find_by_key("bolsas").await.unwrap().is_none());
        assert_eq!(client.query(|_| true).await.unwrap().len(), 1);
        client.delete(1).await.unwrap();
        assert!(matches!(
            client.delete(2).await,
            Err(FrameworkError::NotFound(id)) if id == "2"
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_error_injection() {
        let mut mock = MockClient::<Supply>::new();
        mock.expect_update(3)
            .return_err(FrameworkError::Duplicate("bolsas".into()));

        let result = mock.client().update(3, ()).await;
        assert!(matches!(result, Err(FrameworkError::Duplicate(_))));
        mock.verify();
    }
}
