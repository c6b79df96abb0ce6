use crate::builder::OrderBuilder;
use crate::clients::{AuditLog, ClientRegistry, InventoryLedger, OrderStore, PriceCatalog};
use crate::clock::{SharedClock, SystemClock};
use crate::config::{ConfigError, ShopConfig};
use crate::inventory_actor::InventoryError;
use crate::lifecycle::seed;
use crate::notify::{Notifier, NotifyError, SmsGateway};
use crate::price_actor::PriceError;
use crate::reports::Reports;
use crate::sequencer::{DailySequencer, Sequencer};
use crate::status::StatusService;
use crate::{audit_actor, client_actor, inventory_actor, order_actor, price_actor};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Notifier could not be created: {0}")]
    Notifier(#[from] NotifyError),

    #[error("Seeding the price list failed: {0}")]
    SeedPrices(#[from] PriceError),

    #[error("Seeding the inventory failed: {0}")]
    SeedInventory(#[from] InventoryError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The running shop: every resource actor plus the services built on them.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::start(&ShopConfig::load(None)?).await?;
///
/// let client = system.clients.register("Ana", "8095551234", None, "admin").await?;
/// let order = system.builder.create(new_order).await?;
/// system.status.change_status(order.id, OrderStatus::Ready, "admin").await?;
///
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub company_name: String,
    pub clients: ClientRegistry,
    pub prices: PriceCatalog,
    pub inventory: InventoryLedger,
    pub orders: OrderStore,
    pub audit: AuditLog,
    pub builder: OrderBuilder,
    pub status: StatusService,
    pub reports: Reports,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

/// Replaces the production collaborators of a [`ShopSystem`] before it starts.
pub struct ShopSystemBuilder {
    config: ShopConfig,
    clock: SharedClock,
    notifier: Option<Arc<dyn Notifier>>,
    sequencer: Option<Arc<dyn Sequencer>>,
}

impl ShopSystemBuilder {
    pub fn clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn sequencer(mut self, sequencer: Arc<dyn Sequencer>) -> Self {
        self.sequencer = Some(sequencer);
        self
    }

    /// Spawns every actor, wires the services and seeds the defaults when
    /// `shop.seed_defaults` is set.
    ///
    /// The configuration is validated first; nothing is spawned when it is
    /// invalid.
    pub async fn start(self) -> Result<ShopSystem, SystemError> {
        let Self {
            config,
            clock,
            notifier,
            sequencer,
        } = self;
        config.validate()?;
        let notifier: Arc<dyn Notifier> = match notifier {
            Some(notifier) => notifier,
            None => Arc::new(SmsGateway::new(config.notifications.clone())?),
        };
        let buffer = config.shop.actor_buffer;

        // 1. Create actors (no dependencies)
        let (audit_actor, audit_client) = audit_actor::new(buffer);
        let (order_actor, order_client) = order_actor::new(buffer);
        let (client_actor, client_client) = client_actor::new(buffer);
        let (price_actor, price_client) = price_actor::new(buffer);
        let (inventory_actor, inventory_client) = inventory_actor::new(buffer);

        let audit = AuditLog::new(audit_client, clock.clone());
        let orders = OrderStore::new(order_client);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(audit_actor.run(())),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(client_actor.run(orders.clone())),
            tokio::spawn(price_actor.run(())),
            tokio::spawn(inventory_actor.run(())),
        ];

        // 3. Services
        let clients = ClientRegistry::new(client_client, audit.clone(), clock.clone());
        let prices = PriceCatalog::new(price_client, audit.clone());
        let inventory = InventoryLedger::new(inventory_client, audit.clone());

        let sequencer: Arc<dyn Sequencer> = match sequencer {
            Some(sequencer) => sequencer,
            None => Arc::new(DailySequencer::new(orders.clone())),
        };

        let builder = OrderBuilder::new(
            orders.clone(),
            prices.clone(),
            clients.clone(),
            audit.clone(),
            sequencer,
            clock,
        )
        .allow_unpriced_garments(config.orders.allow_unpriced_garments);
        let status = StatusService::new(
            orders.clone(),
            clients.clone(),
            audit.clone(),
            notifier,
            config.notifications.channel,
        );
        let reports = Reports::new(orders.clone(), clients.clone(), inventory.clone());

        if config.shop.seed_defaults {
            prices.seed(&seed::default_prices()).await?;
            inventory.seed(&seed::SUPPLIES).await?;
        }

        info!(company = %config.shop.company_name, buffer, "Shop started");
        Ok(ShopSystem {
            company_name: config.shop.company_name,
            clients,
            prices,
            inventory,
            orders,
            audit,
            builder,
            status,
            reports,
            handles,
        })
    }
}

impl ShopSystem {
    pub fn builder(config: &ShopConfig) -> ShopSystemBuilder {
        ShopSystemBuilder {
            config: config.clone(),
            clock: Arc::new(SystemClock),
            notifier: None,
            sequencer: None,
        }
    }

    /// Starts the shop with the system clock, the Twilio gateway and the
    /// daily sequencer.
    pub async fn start(config: &ShopConfig) -> Result<Self, SystemError> {
        Self::builder(config).start().await
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the wrappers and services closes the actors' channels; each
    /// actor then drains and exits its loop.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down shop...");

        let Self {
            clients,
            prices,
            inventory,
            orders,
            audit,
            builder,
            status,
            reports,
            handles,
            ..
        } = self;
        drop(builder);
        drop(status);
        drop(reports);
        drop(clients);
        drop(prices);
        drop(inventory);
        drop(orders);
        drop(audit);

        join_actors(handles).await?;
        info!("Shop shutdown complete.");
        Ok(())
    }
}

/// Awaits every handle, even after one has failed, and reports the first
/// failure.
async fn join_actors(handles: Vec<tokio::task::JoinHandle<()>>) -> Result<(), SystemError> {
    let mut first_failure = None;
    for handle in handles {
        if let Err(e) = handle.await {
            error!("Actor task failed: {:?}", e);
            first_failure.get_or_insert_with(|| SystemError::ActorTask(e.to_string()));
        }
    }
    match first_failure {
        Some(failure) => Err(failure),
        None => Ok(()),
    }
}
