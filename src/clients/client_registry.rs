//! # Client Registry
//!
//! Provides a high-level API for interacting with the `Client` actor.
use crate::client_actor::ClientError;
use crate::clients::AuditLog;
use crate::clock::SharedClock;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{tables, AuditAction, Client, ClientCreate, ClientId, ClientUpdate};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Client actor.
#[derive(Clone)]
pub struct ClientRegistry {
    inner: ResourceClient<Client>,
    audit: AuditLog,
    clock: SharedClock,
}

impl ClientRegistry {
    pub fn new(inner: ResourceClient<Client>, audit: AuditLog, clock: SharedClock) -> Self {
        Self {
            inner,
            audit,
            clock,
        }
    }

    /// Registers a client. Fails with [`ClientError::AlreadyExists`] when the
    /// phone number is taken.
    #[instrument(skip(self, address))]
    pub async fn register(
        &self,
        name: &str,
        phone: &str,
        address: Option<&str>,
        user: &str,
    ) -> Result<ClientId, ClientError> {
        debug!("Sending request");
        let id = self
            .inner
            .create(ClientCreate {
                name: name.to_string(),
                phone: phone.to_string(),
                address: address.map(str::to_string),
                created_at: self.clock.now(),
            })
            .await
            .map_err(Self::map_error)?;
        info!(client_id = %id, "Client registered");
        self.audit
            .note(AuditAction::CreateClient, tables::CLIENTS, id.to_string(), user)
            .await;
        Ok(id)
    }

    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<Client>, ClientError> {
        self.inner
            .find_by_key(phone.trim())
            .await
            .map_err(Self::map_error)
    }

    /// All clients sorted by name.
    pub async fn list(&self) -> Result<Vec<Client>, ClientError> {
        let mut clients = self.inner.query(|_| true).await.map_err(Self::map_error)?;
        clients.sort_by_cached_key(|c| (c.name.to_lowercase(), c.id));
        Ok(clients)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: ClientId,
        update: ClientUpdate,
        user: &str,
    ) -> Result<Client, ClientError> {
        debug!("Sending request");
        let client = self.inner.update(id, update).await.map_err(Self::map_error)?;
        self.audit
            .note(AuditAction::EditClient, tables::CLIENTS, id.to_string(), user)
            .await;
        Ok(client)
    }

    /// Deletes a client that no order references.
    ///
    /// # Errors
    /// [`ClientError::InUse`] while orders still point at the client.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: ClientId, user: &str) -> Result<(), ClientError> {
        self.delete(id).await?;
        self.audit
            .note(AuditAction::DeleteClient, tables::CLIENTS, id.to_string(), user)
            .await;
        Ok(())
    }
}

#[async_trait]
impl ActorClient<Client> for ClientRegistry {
    type Error = ClientError;

    fn inner(&self) -> &ResourceClient<Client> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Duplicate(phone) => ClientError::AlreadyExists(phone),
            FrameworkError::NotFound(id) => ClientError::NotFound(id),
            other => {
                other.into_entity_error(|e| ClientError::ActorCommunicationError(e.to_string()))
            }
        }
    }
}
