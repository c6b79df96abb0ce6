//! [`ActorEntity`] implementation for [`PriceEntry`].

use super::PriceError;
use crate::framework::ActorEntity;
use crate::model::{normalize_garment, PriceCreate, PriceEntry, PriceId, PriceUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for PriceEntry {
    type Id = PriceId;
    type Create = PriceCreate;
    type Update = PriceUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = PriceError;

    fn from_create_params(id: PriceId, params: PriceCreate) -> Result<Self, PriceError> {
        Ok(Self {
            id,
            garment_type: garment(&params.garment_type)?,
            unit_price: price(params.unit_price)?,
            category: params.category,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.garment_type.clone())
    }

    async fn on_update(&mut self, update: PriceUpdate, _ctx: &()) -> Result<(), PriceError> {
        if let Some(garment_type) = update.garment_type {
            self.garment_type = garment(&garment_type)?;
        }
        if let Some(unit_price) = update.unit_price {
            self.unit_price = price(unit_price)?;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), PriceError> {
        match action {}
    }
}

fn garment(raw: &str) -> Result<String, PriceError> {
    let garment_type = normalize_garment(raw);
    if garment_type.is_empty() {
        return Err(PriceError::Validation("garment type is required".into()));
    }
    Ok(garment_type)
}

fn price(unit_price: Decimal) -> Result<Decimal, PriceError> {
    if unit_price < Decimal::ZERO {
        return Err(PriceError::NegativePrice(unit_price));
    }
    Ok(unit_price)
}
