// order_service/src/repositories/orders_in_memory.rs

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use super::OrderLedger;
use crate::models::{CreateOrderData, Order, OrderProduct};

#[derive(Debug, Default)]
pub struct InMemoryOrderLedger {
  orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderLedger {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn orders(&self) -> Vec<Order> {
    self.orders.read().clone()
  }

  pub fn find_by_id(&self, id: Uuid) -> Option<Order> {
    self.orders.read().iter().find(|o| o.id == id).cloned()
  }
}

#[async_trait]
impl OrderLedger for InMemoryOrderLedger {
  async fn create(&self, data: CreateOrderData) -> anyhow::Result<Order> {
    let now = Utc::now();
    let order_id = Uuid::new_v4();
    let order_products = data
      .products
      .into_iter()
      .map(|item| OrderProduct {
        id: Uuid::new_v4(),
        order_id,
        product_id: item.product_id,
        quantity: item.quantity,
        price_cents: item.price_cents,
        created_at: now,
        updated_at: now,
      })
      .collect();

    let order = Order {
      id: order_id,
      customer: data.customer,
      order_products,
      created_at: now,
      updated_at: now,
    };
    self.orders.write().push(order.clone());
    info!(order_id = %order.id, customer_id = %order.customer.id, "Order stored.");
    Ok(order)
  }
}
