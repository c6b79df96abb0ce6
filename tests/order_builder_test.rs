//! OrderBuilder against a real order actor, with the price list and client
//! registry mocked.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use laundry_desk::audit_actor;
use laundry_desk::builder::{ClientRef, NewOrder, OrderBuilder};
use laundry_desk::clients::{AuditLog, ClientRegistry, OrderStore, PriceCatalog};
use laundry_desk::clock::{ManualClock, SharedClock};
use laundry_desk::framework::mock::MockClient;
use laundry_desk::framework::FrameworkError;
use laundry_desk::model::{
    tables, AuditAction, Cart, Category, Client, ClientId, PriceEntry, PriceId,
};
use laundry_desk::order_actor::{self, OrderError};
use laundry_desk::price_actor::PriceError;
use laundry_desk::sequencer::DailySequencer;
use rust_decimal::Decimal;
use std::sync::Arc;

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

fn entry(id: u32, garment: &str, pesos: i64) -> PriceEntry {
    PriceEntry {
        id: PriceId(id),
        garment_type: garment.to_string(),
        unit_price: Decimal::from(pesos),
        category: Category::Casual,
    }
}

fn ana() -> Client {
    Client {
        id: ClientId(7),
        name: "Ana".to_string(),
        phone: "8095551234".to_string(),
        address: None,
        created_at: noon(),
    }
}

fn request(client: Option<ClientRef>, cart: Cart) -> NewOrder {
    NewOrder {
        client,
        delivery_date: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
        notes: "sin almidón".to_string(),
        cart,
        acting_user: "maria".to_string(),
    }
}

struct Fixture {
    builder: OrderBuilder,
    orders: OrderStore,
    audit: AuditLog,
}

/// Real order and audit actors; prices and clients come from the mocks.
fn fixture(prices: &MockClient<PriceEntry>, clients: &MockClient<Client>) -> Fixture {
    let clock: SharedClock = Arc::new(ManualClock::at(noon()));

    let (audit_actor, audit_client) = audit_actor::new(8);
    tokio::spawn(audit_actor.run(()));
    let audit = AuditLog::new(audit_client, clock.clone());

    let (order_actor, order_client) = order_actor::new(8);
    tokio::spawn(order_actor.run(()));
    let orders = OrderStore::new(order_client);

    let builder = OrderBuilder::new(
        orders.clone(),
        PriceCatalog::new(prices.client(), audit.clone()),
        ClientRegistry::new(clients.client(), audit.clone(), clock.clone()),
        audit.clone(),
        Arc::new(DailySequencer::new(orders.clone())),
        clock,
    );

    Fixture {
        builder,
        orders,
        audit,
    }
}

#[tokio::test]
async fn test_lines_are_priced_in_cart_order() {
    let mut prices = MockClient::<PriceEntry>::new();
    let clients = MockClient::<Client>::new();

    prices
        .expect_find_by_key("camisa casual")
        .return_ok(Some(entry(1, "camisa casual", 25)));
    prices
        .expect_find_by_key("pantalón jean")
        .return_ok(Some(entry(2, "pantalón jean", 35)));

    let fx = fixture(&prices, &clients);
    let cart = Cart::new()
        .add("Camisa Casual", 2)
        .add("toalla de baño", 0)
        .add("pantalón jean", 1);

    let order = fx.builder.create(request(None, cart)).await.unwrap();

    assert_eq!(order.number.to_string(), "20240315-0001");
    assert_eq!(order.items[0].garment_type, "camisa casual");
    assert_eq!(order.items[0].subtotal, Decimal::from(50));
    assert_eq!(order.items[1].garment_type, "pantalón jean");
    assert_eq!(order.total, Decimal::from(85));
    assert_eq!(order.notes, "sin almidón");

    let audit = fx
        .audit
        .entries_for(tables::ORDERS, &order.id.to_string())
        .await
        .unwrap();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].action, AuditAction::CreateOrder);

    prices.verify();
    clients.verify();
}

#[tokio::test]
async fn test_unknown_garment_stops_before_client_lookup() {
    let mut prices = MockClient::<PriceEntry>::new();
    let clients = MockClient::<Client>::new();

    prices.expect_find_by_key("kimono").return_ok(None);

    let fx = fixture(&prices, &clients);
    let err = fx
        .builder
        .create(request(
            Some(ClientRef::Id(ClientId(7))),
            Cart::new().add("kimono", 1),
        ))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::UnknownGarment("kimono".into()));
    assert!(fx.orders.all().await.unwrap().is_empty());
    prices.verify();
    clients.verify();
}

#[tokio::test]
async fn test_quantity_too_large_is_rejected() {
    let prices = MockClient::<PriceEntry>::new();
    let clients = MockClient::<Client>::new();

    let fx = fixture(&prices, &clients);
    let err = fx
        .builder
        .create(request(None, Cart::new().add("sábana", i64::MAX)))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        OrderError::InvalidQuantity {
            garment: "sábana".into(),
            quantity: i64::MAX,
        }
    );
}

#[tokio::test]
async fn test_client_resolved_by_id() {
    let mut prices = MockClient::<PriceEntry>::new();
    let mut clients = MockClient::<Client>::new();

    prices
        .expect_find_by_key("camisa casual")
        .return_ok(Some(entry(1, "camisa casual", 25)));
    clients.expect_get(ClientId(7)).return_ok(Some(ana()));
    clients.expect_get(ClientId(7)).return_ok(Some(ana()));

    let fx = fixture(&prices, &clients);
    let order = fx
        .builder
        .create(request(
            Some(ClientRef::Id(ClientId(7))),
            Cart::new().add("camisa casual", 1),
        ))
        .await
        .unwrap();

    assert_eq!(order.client_id, Some(ClientId(7)));
    clients.verify();
}

#[tokio::test]
async fn test_missing_client_id_is_reported() {
    let mut prices = MockClient::<PriceEntry>::new();
    let mut clients = MockClient::<Client>::new();

    prices
        .expect_find_by_key("camisa casual")
        .return_ok(Some(entry(1, "camisa casual", 25)));
    clients.expect_get(ClientId(7)).return_ok(None);

    let fx = fixture(&prices, &clients);
    let err = fx
        .builder
        .create(request(
            Some(ClientRef::Id(ClientId(7))),
            Cart::new().add("camisa casual", 1),
        ))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::ClientNotFound("client_7".into()));
    assert!(fx.orders.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_client_resolved_by_trimmed_phone() {
    let mut prices = MockClient::<PriceEntry>::new();
    let mut clients = MockClient::<Client>::new();

    prices
        .expect_find_by_key("camisa casual")
        .return_ok(Some(entry(1, "camisa casual", 25)));
    clients
        .expect_find_by_key("8095551234")
        .return_ok(Some(ana()));
    clients.expect_get(ClientId(7)).return_ok(Some(ana()));

    let fx = fixture(&prices, &clients);
    let order = fx
        .builder
        .create(request(
            Some(ClientRef::Phone(" 8095551234 ".into())),
            Cart::new().add("camisa casual", 1),
        ))
        .await
        .unwrap();

    assert_eq!(order.client_id, Some(ClientId(7)));
    clients.verify();
}

#[tokio::test]
async fn test_order_withdrawn_when_client_vanishes_after_insert() {
    let mut prices = MockClient::<PriceEntry>::new();
    let mut clients = MockClient::<Client>::new();

    prices
        .expect_find_by_key("camisa casual")
        .return_ok(Some(entry(1, "camisa casual", 25)));
    clients.expect_get(ClientId(7)).return_ok(Some(ana()));
    clients.expect_get(ClientId(7)).return_ok(None);

    let fx = fixture(&prices, &clients);
    let err = fx
        .builder
        .create(request(
            Some(ClientRef::Id(ClientId(7))),
            Cart::new().add("camisa casual", 1),
        ))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::ClientNotFound("client_7".into()));
    assert!(fx.orders.all().await.unwrap().is_empty());
    assert!(fx
        .audit
        .entries()
        .await
        .unwrap()
        .iter()
        .all(|e| e.action != AuditAction::CreateOrder));
    clients.verify();
}

#[tokio::test]
async fn test_catalog_failure_surfaces_as_catalog_error() {
    let mut prices = MockClient::<PriceEntry>::new();
    let clients = MockClient::<Client>::new();

    prices
        .expect_find_by_key("camisa casual")
        .return_err(FrameworkError::ActorClosed);

    let fx = fixture(&prices, &clients);
    let err = fx
        .builder
        .create(request(None, Cart::new().add("camisa casual", 1)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrderError::Catalog(PriceError::ActorCommunicationError(_))
    ));
}
