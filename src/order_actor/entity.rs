//! [`ActorEntity`] implementation for [`Order`].
//!
//! Line subtotals and the order total are computed here, when the order is
//! built from its create payload, so a stored order always satisfies
//! `total == sum(items.subtotal)` and always has at least one item.

use super::actions::{OrderAction, OrderActionResult};
use super::OrderError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderStatus};
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let items = params
            .lines
            .into_iter()
            .map(|line| {
                if line.quantity == 0 {
                    return Err(OrderError::InvalidQuantity {
                        garment: line.garment_type,
                        quantity: 0,
                    });
                }
                if line.unit_price < Decimal::ZERO {
                    return Err(OrderError::ValidationError(format!(
                        "negative unit price for {}",
                        line.garment_type
                    )));
                }
                Ok(OrderItem {
                    subtotal: line.unit_price * Decimal::from(line.quantity),
                    garment_type: line.garment_type,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total = items.iter().map(|item| item.subtotal).sum();

        Ok(Self {
            id,
            number: params.number,
            client_id: params.client_id,
            status: OrderStatus::Pending,
            created_at: params.created_at,
            delivery_date: params.delivery_date,
            total,
            notes: params.notes.trim().to_string(),
            items,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.number.to_string())
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::SetStatus(status) => {
                let previous = std::mem::replace(&mut self.status, status);
                Ok(OrderActionResult::SetStatus {
                    previous,
                    order: self.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderLine, OrderNumber};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn line(garment: &str, quantity: u32, unit_price: Decimal) -> OrderLine {
        OrderLine {
            garment_type: garment.into(),
            quantity,
            unit_price,
        }
    }

    fn create(lines: Vec<OrderLine>) -> OrderCreate {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        OrderCreate {
            number: OrderNumber::new(date, 1).unwrap(),
            client_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap(),
            delivery_date: date,
            notes: " starch the collars ".into(),
            lines,
        }
    }

    #[test]
    fn total_is_sum_of_subtotals() {
        let order = Order::from_create_params(
            OrderId(1),
            create(vec![
                line("camisa casual", 2, dec(2500)),
                line("pantalón jean", 1, dec(3500)),
            ]),
        )
        .unwrap();

        assert_eq!(order.items[0].subtotal, dec(5000));
        assert_eq!(order.total, dec(8500));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.notes, "starch the collars");
        assert_eq!(order.unique_key().as_deref(), Some("20240315-0001"));
    }

    #[test]
    fn empty_orders_cannot_exist() {
        let err = Order::from_create_params(OrderId(1), create(vec![])).unwrap_err();
        assert_eq!(err, OrderError::EmptyCart);
    }

    #[test]
    fn zero_quantity_lines_are_rejected() {
        let err = Order::from_create_params(OrderId(1), create(vec![line("sábana", 0, dec(5000))]))
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity { .. }));
    }

    #[tokio::test]
    async fn set_status_reports_previous_status() {
        let mut order =
            Order::from_create_params(OrderId(1), create(vec![line("toalla", 1, dec(2000))])).unwrap();
        let result = order
            .handle_action(OrderAction::SetStatus(OrderStatus::Ready), &())
            .await
            .unwrap();
        let OrderActionResult::SetStatus { previous, order } = result;
        assert_eq!(previous, OrderStatus::Pending);
        assert_eq!(order.status, OrderStatus::Ready);
    }
}
