// order_service/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Customer, NewLineItem, OrderProduct};

/// Input of `OrderLedger::create`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderData {
  pub customer: Customer,
  pub products: Vec<NewLineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  pub id: Uuid,
  pub customer: Customer,
  pub order_products: Vec<OrderProduct>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Order {
  pub fn total_cents(&self) -> i64 {
    self
      .order_products
      .iter()
      .map(|p| p.price_cents * i64::from(p.quantity))
      .sum()
  }
}
