//! # Laundry Desk demo
//!
//! Starts the shop, registers a client, takes an order, marks it ready and
//! prints the day's figures.

use chrono::{Duration, Utc};
use laundry_desk::builder::{ClientRef, NewOrder};
use laundry_desk::config::ShopConfig;
use laundry_desk::lifecycle::{setup_tracing, ShopSystem};
use laundry_desk::model::{Cart, OrderStatus};
use laundry_desk::status::Notification;
use tracing::{error, info, warn, Instrument};

const DEMO_USER: &str = "admin";

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ShopConfig::load(None).map_err(|e| e.to_string())?;
    info!(company = %config.shop.company_name, "Starting laundry desk");

    let system = ShopSystem::start(&config).await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("client_registration");
    let client_id = async {
        info!("Registering demo client");
        system
            .clients
            .register("Ana Pérez", "8095551234", Some("Calle El Conde 12"), DEMO_USER)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(client_id = %client_id, "Client registered");

    let request = NewOrder {
        client: Some(ClientRef::Phone("8095551234".to_string())),
        delivery_date: (Utc::now() + Duration::days(2)).date_naive(),
        notes: "Sin almidón".to_string(),
        cart: Cart::new()
            .add("camisa casual", 2)
            .add("pantalón jean", 1)
            .add("toalla de baño", 0),
        acting_user: DEMO_USER.to_string(),
    };

    let span = tracing::info_span!("order_intake");
    let order = match system.builder.create(request).instrument(span).await {
        Ok(order) => order,
        Err(e) => {
            error!(error = %e, "Order intake failed");
            system.shutdown().await.map_err(|e| e.to_string())?;
            return Err(e.to_string());
        }
    };
    info!(order_number = %order.number, total = %order.total, "Order taken");

    let change = system
        .status
        .change_status(order.id, OrderStatus::Ready, DEMO_USER)
        .await
        .map_err(|e| e.to_string())?;
    match &change.notification {
        Notification::Sent { message_id } => info!(%message_id, "Client notified"),
        Notification::Failed(e) => warn!(warning = %e, "Order is ready, client not notified"),
        Notification::NotRequired => {}
    }

    let sales = system
        .reports
        .sales_on(order.created_on())
        .await
        .map_err(|e| e.to_string())?;
    let dashboard = system.reports.dashboard().await.map_err(|e| e.to_string())?;
    info!(
        %sales,
        recent_orders = dashboard.recent_orders.len(),
        low_stock = dashboard.low_stock.len(),
        "Today's figures"
    );

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Laundry desk finished");
    Ok(())
}
