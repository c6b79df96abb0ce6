//! Read-only views over orders, clients and inventory.

use crate::client_actor::ClientError;
use crate::clients::{ClientRegistry, InventoryLedger, OrderStore};
use crate::framework::ActorClient;
use crate::inventory_actor::InventoryError;
use crate::model::{Client, ClientId, InventoryItem, Order, OrderId};
use crate::order_actor::OrderError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use thiserror::Error;

/// Orders shown on the dashboard.
pub const DASHBOARD_ORDERS: usize = 20;
pub const DEFAULT_POPULAR_LIMIT: usize = 10;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReportError {
    #[error(transparent)]
    Orders(#[from] OrderError),
    #[error(transparent)]
    Clients(#[from] ClientError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub order: Order,
    pub client_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub recent_orders: Vec<OrderSummary>,
    pub low_stock: Vec<InventoryItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
    pub client: Option<Client>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientHistory {
    pub client: Client,
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GarmentPopularity {
    pub garment_type: String,
    pub quantity: u64,
}

#[derive(Clone)]
pub struct Reports {
    orders: OrderStore,
    clients: ClientRegistry,
    inventory: InventoryLedger,
}

impl Reports {
    pub fn new(orders: OrderStore, clients: ClientRegistry, inventory: InventoryLedger) -> Self {
        Self {
            orders,
            clients,
            inventory,
        }
    }

    pub async fn dashboard(&self) -> Result<Dashboard, ReportError> {
        let names: HashMap<ClientId, String> = self
            .clients
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let recent_orders = self
            .orders
            .recent(DASHBOARD_ORDERS)
            .await?
            .into_iter()
            .map(|order| OrderSummary {
                client_name: order.client_id.and_then(|id| names.get(&id).cloned()),
                order,
            })
            .collect();

        Ok(Dashboard {
            recent_orders,
            low_stock: self.inventory.low_stock().await?,
        })
    }

    /// Sum of the totals of orders created on `date` (UTC).
    pub async fn sales_on(&self, date: NaiveDate) -> Result<Decimal, ReportError> {
        Ok(self
            .orders
            .created_on(date)
            .await?
            .iter()
            .map(|o| o.total)
            .sum())
    }

    /// Garment types by total quantity ordered, highest first; ties by name.
    pub async fn popular_garments(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<GarmentPopularity>, ReportError> {
        let mut totals: HashMap<String, u64> = HashMap::new();
        for order in self.orders.all().await? {
            for item in order.items {
                *totals.entry(item.garment_type).or_default() += u64::from(item.quantity);
            }
        }

        let mut ranked: Vec<_> = totals
            .into_iter()
            .map(|(garment_type, quantity)| GarmentPopularity {
                garment_type,
                quantity,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.quantity
                .cmp(&a.quantity)
                .then_with(|| a.garment_type.cmp(&b.garment_type))
        });
        ranked.truncate(limit.unwrap_or(DEFAULT_POPULAR_LIMIT));
        Ok(ranked)
    }

    pub async fn order_detail(&self, id: OrderId) -> Result<OrderDetail, ReportError> {
        let order = self
            .orders
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        let client = match order.client_id {
            Some(client_id) => self.clients.get(client_id).await?,
            None => None,
        };
        Ok(OrderDetail { order, client })
    }

    /// The client and their orders, newest first.
    pub async fn client_history(&self, client_id: ClientId) -> Result<ClientHistory, ReportError> {
        let client = self
            .clients
            .get(client_id)
            .await?
            .ok_or_else(|| ClientError::NotFound(client_id.to_string()))?;
        Ok(ClientHistory {
            client,
            orders: self.orders.for_client(client_id).await?,
        })
    }
}
