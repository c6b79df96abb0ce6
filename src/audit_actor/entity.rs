use super::AuditError;
use crate::framework::ActorEntity;
use crate::model::{AuditCreate, AuditEntry, AuditId};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for AuditEntry {
    type Id = AuditId;
    type Create = AuditCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = AuditError;

    fn from_create_params(id: AuditId, params: AuditCreate) -> Result<Self, AuditError> {
        let username = params.username.trim().to_string();
        if username.is_empty() {
            return Err(AuditError::MissingUser);
        }
        Ok(Self {
            id,
            action: params.action,
            table: params.table,
            row_id: params.row_id,
            username,
            created_at: params.created_at,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), AuditError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), AuditError> {
        match action {}
    }
}
