//! [`ActorEntity`] implementation for [`Client`].

use super::ClientError;
use crate::clients::OrderStore;
use crate::framework::ActorEntity;
use crate::model::{non_blank, Client, ClientCreate, ClientId, ClientUpdate};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Client {
    type Id = ClientId;
    type Create = ClientCreate;
    type Update = ClientUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = OrderStore;
    type Error = ClientError;

    /// Trims every field; name and phone must be non-blank.
    fn from_create_params(id: ClientId, params: ClientCreate) -> Result<Self, ClientError> {
        Ok(Self {
            id,
            name: required("name", params.name)?,
            phone: required("phone", params.phone)?,
            address: non_blank(params.address),
            created_at: params.created_at,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.phone.clone())
    }

    async fn on_update(
        &mut self,
        update: ClientUpdate,
        _ctx: &OrderStore,
    ) -> Result<(), ClientError> {
        if let Some(name) = update.name {
            self.name = required("name", name)?;
        }
        if let Some(phone) = update.phone {
            self.phone = required("phone", phone)?;
        }
        if let Some(address) = update.address {
            self.address = non_blank(Some(address));
        }
        Ok(())
    }

    async fn on_delete(&self, orders: &OrderStore) -> Result<(), ClientError> {
        let referencing = orders
            .count_for_client(self.id)
            .await
            .map_err(|e| ClientError::ActorCommunicationError(e.to_string()))?;
        if referencing > 0 {
            return Err(ClientError::InUse {
                client: self.id.to_string(),
                orders: referencing,
            });
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &OrderStore,
    ) -> Result<(), ClientError> {
        match action {}
    }
}

fn required(field: &str, value: String) -> Result<String, ClientError> {
    non_blank(Some(value)).ok_or_else(|| ClientError::Validation(format!("{field} is required")))
}
