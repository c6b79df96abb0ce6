//! # Audit Log
//!
//! Append-only trail of mutations. Other wrappers call [`AuditLog::note`],
//! which never fails the caller: a lost audit entry is logged as a warning.

use crate::audit_actor::AuditError;
use crate::clock::SharedClock;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{AuditAction, AuditCreate, AuditEntry, AuditId};
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct AuditLog {
    inner: ResourceClient<AuditEntry>,
    clock: SharedClock,
}

impl AuditLog {
    pub fn new(inner: ResourceClient<AuditEntry>, clock: SharedClock) -> Self {
        Self { inner, clock }
    }

    fn map_error(e: FrameworkError) -> AuditError {
        e.into_entity_error(|e| AuditError::ActorCommunicationError(e.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn record(
        &self,
        action: AuditAction,
        table: &str,
        row_id: Option<String>,
        username: &str,
    ) -> Result<AuditId, AuditError> {
        debug!("Sending request");
        self.inner
            .create(AuditCreate {
                action,
                table: table.to_string(),
                row_id,
                username: username.to_string(),
                created_at: self.clock.now(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Records an entry, logging instead of returning a failure.
    pub async fn note(&self, action: AuditAction, table: &str, row_id: String, username: &str) {
        if let Err(e) = self.record(action, table, Some(row_id), username).await {
            warn!(%action, table, error = %e, "Audit entry lost");
        }
    }

    /// Every entry, oldest first.
    pub async fn entries(&self) -> Result<Vec<AuditEntry>, AuditError> {
        self.inner.query(|_| true).await.map_err(Self::map_error)
    }

    pub async fn entries_for(
        &self,
        table: &str,
        row_id: &str,
    ) -> Result<Vec<AuditEntry>, AuditError> {
        let table = table.to_string();
        let row_id = row_id.to_string();
        self.inner
            .query(move |entry| {
                entry.table == table && entry.row_id.as_deref() == Some(row_id.as_str())
            })
            .await
            .map_err(Self::map_error)
    }
}
