//! # Price Catalog
//!
//! Provides a high-level API for interacting with the `PriceEntry` actor.
//! Lookups normalize the garment type the same way entries are stored.
use crate::clients::AuditLog;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{
    normalize_garment, tables, AuditAction, Category, PriceCreate, PriceEntry, PriceId,
    PriceUpdate,
};
use crate::price_actor::PriceError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Client for interacting with the Price actor.
#[derive(Clone)]
pub struct PriceCatalog {
    inner: ResourceClient<PriceEntry>,
    audit: AuditLog,
}

impl PriceCatalog {
    pub fn new(inner: ResourceClient<PriceEntry>, audit: AuditLog) -> Self {
        Self { inner, audit }
    }

    #[instrument(skip(self))]
    pub async fn add(
        &self,
        garment_type: &str,
        unit_price: Decimal,
        category: Category,
        user: &str,
    ) -> Result<PriceId, PriceError> {
        debug!("Sending request");
        let id = self.insert(garment_type, unit_price, category).await?;
        self.audit
            .note(AuditAction::CreatePrice, tables::PRICES, id.to_string(), user)
            .await;
        Ok(id)
    }

    async fn insert(
        &self,
        garment_type: &str,
        unit_price: Decimal,
        category: Category,
    ) -> Result<PriceId, PriceError> {
        self.inner
            .create(PriceCreate {
                garment_type: garment_type.to_string(),
                unit_price,
                category,
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn edit(
        &self,
        id: PriceId,
        update: PriceUpdate,
        user: &str,
    ) -> Result<PriceEntry, PriceError> {
        debug!("Sending request");
        let entry = self.inner.update(id, update).await.map_err(Self::map_error)?;
        self.audit
            .note(AuditAction::EditPrice, tables::PRICES, id.to_string(), user)
            .await;
        Ok(entry)
    }

    pub async fn entry(&self, garment_type: &str) -> Result<Option<PriceEntry>, PriceError> {
        self.inner
            .find_by_key(normalize_garment(garment_type))
            .await
            .map_err(Self::map_error)
    }

    /// Current unit price of a garment type, `None` if it is not listed.
    pub async fn price_of(&self, garment_type: &str) -> Result<Option<Decimal>, PriceError> {
        Ok(self.entry(garment_type).await?.map(|e| e.unit_price))
    }

    /// Every entry, by category then garment type.
    pub async fn list(&self) -> Result<Vec<PriceEntry>, PriceError> {
        let mut entries = self.inner.query(|_| true).await.map_err(Self::map_error)?;
        entries.sort_by(|a, b| {
            (a.category, &a.garment_type).cmp(&(b.category, &b.garment_type))
        });
        Ok(entries)
    }

    pub async fn by_category(&self) -> Result<BTreeMap<Category, Vec<PriceEntry>>, PriceError> {
        let mut grouped: BTreeMap<Category, Vec<PriceEntry>> = BTreeMap::new();
        for entry in self.list().await? {
            grouped.entry(entry.category).or_default().push(entry);
        }
        Ok(grouped)
    }

    /// Adds every `(garment, price, category)` that is not listed yet and
    /// returns how many were inserted. Existing entries keep their price.
    #[instrument(skip(self, defaults))]
    pub async fn seed(&self, defaults: &[(&str, Decimal, Category)]) -> Result<usize, PriceError> {
        let mut inserted = 0;
        for (garment_type, unit_price, category) in defaults {
            match self.insert(garment_type, *unit_price, *category).await {
                Ok(_) => inserted += 1,
                Err(PriceError::AlreadyExists(_)) => {}
                Err(e) => return Err(e),
            }
        }
        info!(inserted, "Price list seeded");
        Ok(inserted)
    }
}

#[async_trait]
impl ActorClient<PriceEntry> for PriceCatalog {
    type Error = PriceError;

    fn inner(&self) -> &ResourceClient<PriceEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Duplicate(garment) => PriceError::AlreadyExists(garment),
            FrameworkError::NotFound(id) => PriceError::NotFound(id),
            other => {
                other.into_entity_error(|e| PriceError::ActorCommunicationError(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::framework::mock::MockClient;
    use crate::{audit_actor, price_actor};
    use std::sync::Arc;

    fn spawn_catalog() -> PriceCatalog {
        let (audit_actor, audit_client) = audit_actor::new(8);
        tokio::spawn(audit_actor.run(()));
        let audit = AuditLog::new(audit_client, Arc::new(SystemClock));

        let (actor, client) = price_actor::new(8);
        tokio::spawn(actor.run(()));
        PriceCatalog::new(client, audit)
    }

    fn pesos(amount: i64) -> Decimal {
        Decimal::from(amount)
    }

    #[tokio::test]
    async fn garment_type_is_unique_after_normalizing() {
        let catalog = spawn_catalog();
        catalog
            .add("Camisa Casual", pesos(25), Category::Casual, "admin")
            .await
            .unwrap();

        let err = catalog
            .add(" camisa casual", pesos(30), Category::Formal, "admin")
            .await
            .unwrap_err();
        assert_eq!(err, PriceError::AlreadyExists("camisa casual".into()));
        assert_eq!(catalog.price_of("CAMISA CASUAL").await.unwrap(), Some(pesos(25)));
    }

    #[tokio::test]
    async fn negative_prices_are_rejected() {
        let catalog = spawn_catalog();
        let err = catalog
            .add("toalla", pesos(-1), Category::Linens, "admin")
            .await
            .unwrap_err();
        assert_eq!(err, PriceError::NegativePrice(pesos(-1)));
    }

    #[tokio::test]
    async fn edit_changes_price_and_rejects_rename_collision() {
        let catalog = spawn_catalog();
        let shirt = catalog
            .add("camisa casual", pesos(25), Category::Casual, "admin")
            .await
            .unwrap();
        catalog
            .add("toalla", pesos(20), Category::Linens, "admin")
            .await
            .unwrap();

        let update = PriceUpdate {
            unit_price: Some(pesos(40)),
            ..Default::default()
        };
        let entry = catalog.edit(shirt, update, "admin").await.unwrap();
        assert_eq!(entry.unit_price, pesos(40));

        let rename = PriceUpdate {
            garment_type: Some("Toalla".into()),
            ..Default::default()
        };
        let err = catalog.edit(shirt, rename, "admin").await.unwrap_err();
        assert_eq!(err, PriceError::AlreadyExists("toalla".into()));
    }

    #[tokio::test]
    async fn list_and_grouping_follow_category_order() {
        let catalog = spawn_catalog();
        catalog.add("toalla", pesos(20), Category::Linens, "admin").await.unwrap();
        catalog.add("traje", pesos(150), Category::Formal, "admin").await.unwrap();
        catalog.add("blusa", pesos(30), Category::Casual, "admin").await.unwrap();
        catalog.add("abrigo", pesos(120), Category::Formal, "admin").await.unwrap();

        let garments: Vec<_> = catalog
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.garment_type)
            .collect();
        assert_eq!(garments, vec!["blusa", "abrigo", "traje", "toalla"]);

        let grouped = catalog.by_category().await.unwrap();
        assert_eq!(grouped[&Category::Formal].len(), 2);
        assert!(!grouped.contains_key(&Category::Bedding));
    }

    #[tokio::test]
    async fn seeding_skips_existing_entries() {
        let catalog = spawn_catalog();
        catalog.add("toalla", pesos(99), Category::Linens, "admin").await.unwrap();

        let defaults = [
            ("toalla", pesos(20), Category::Linens),
            ("sábana", pesos(50), Category::Bedding),
        ];
        assert_eq!(catalog.seed(&defaults).await.unwrap(), 1);
        assert_eq!(catalog.seed(&defaults).await.unwrap(), 0);
        assert_eq!(catalog.price_of("toalla").await.unwrap(), Some(pesos(99)));
    }

    #[tokio::test]
    async fn actor_failure_is_a_communication_error() {
        let mut mock = MockClient::<PriceEntry>::new();
        mock.expect_find_by_key("toalla")
            .return_err(FrameworkError::ActorClosed);

        let (audit_actor, audit_client) = audit_actor::new(8);
        tokio::spawn(audit_actor.run(()));
        let catalog = PriceCatalog::new(
            mock.client(),
            AuditLog::new(audit_client, Arc::new(SystemClock)),
        );

        let err = catalog.price_of(" Toalla ").await.unwrap_err();
        assert!(matches!(err, PriceError::ActorCommunicationError(_)));
        mock.verify();
    }
}
