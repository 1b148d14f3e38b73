// tests/common/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use once_cell::sync::Lazy;
use chrono::Utc;
use order_service::models::{
  CatalogProduct, CreateOrderData, Customer, Order, OrderProduct, OrderRequest, QuantityUpdate, RequestedProduct,
};
use order_service::repositories::{
  InMemoryCustomerDirectory, InMemoryOrderLedger, InMemoryProductCatalog, OrderLedger, ProductCatalog,
};
use order_service::{OrderCreationWorkflow, Repositories, StockUpdateMode, WorkflowConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Barrier;
use tracing::Level;
use uuid::Uuid;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Wraps the in-memory catalog to count reads, optionally hold every read at a barrier,
/// and optionally fail every stock write.
pub struct TestCatalog {
  pub inner: Arc<InMemoryProductCatalog>,
  pub reads: AtomicUsize,
  pub read_gate: Option<Arc<Barrier>>,
  pub fail_writes: bool,
}

impl TestCatalog {
  pub fn new(inner: Arc<InMemoryProductCatalog>) -> Self {
    Self {
      inner,
      reads: AtomicUsize::new(0),
      read_gate: None,
      fail_writes: false,
    }
  }

  pub fn reads(&self) -> usize {
    self.reads.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl ProductCatalog for TestCatalog {
  async fn find_all_by_id(&self, ids: &[Uuid]) -> anyhow::Result<Vec<CatalogProduct>> {
    self.reads.fetch_add(1, Ordering::SeqCst);
    let found = self.inner.find_all_by_id(ids).await?;
    if let Some(gate) = &self.read_gate {
      gate.wait().await;
    }
    Ok(found)
  }

  async fn update_quantity(&self, updates: &[QuantityUpdate]) -> anyhow::Result<()> {
    if self.fail_writes {
      anyhow::bail!("catalog unavailable");
    }
    self.inner.update_quantity(updates).await
  }

  async fn decrement_quantity(&self, updates: &[QuantityUpdate]) -> anyhow::Result<()> {
    if self.fail_writes {
      anyhow::bail!("catalog unavailable");
    }
    self.inner.decrement_quantity(updates).await
  }
}

pub struct FailingLedger;

#[async_trait]
impl OrderLedger for FailingLedger {
  async fn create(&self, _data: CreateOrderData) -> anyhow::Result<Order> {
    anyhow::bail!("ledger unavailable")
  }
}

/// Stores the order as given, plus a line item for a product the catalog never returned.
pub struct StrayLineLedger {
  pub inner: Arc<InMemoryOrderLedger>,
  pub stray_product_id: Uuid,
}

#[async_trait]
impl OrderLedger for StrayLineLedger {
  async fn create(&self, data: CreateOrderData) -> anyhow::Result<Order> {
    let mut order = self.inner.create(data).await?;
    let now = Utc::now();
    order.order_products.push(OrderProduct {
      id: Uuid::new_v4(),
      order_id: order.id,
      product_id: self.stray_product_id,
      quantity: 1,
      price_cents: 1,
      created_at: now,
      updated_at: now,
    });
    Ok(order)
  }
}

/// One customer and two products: `p1` priced 10 with 5 in stock, `p2` priced 20 with 3.
pub struct Fixture {
  pub customer: Customer,
  pub p1: CatalogProduct,
  pub p2: CatalogProduct,
  pub customers: Arc<InMemoryCustomerDirectory>,
  pub catalog: Arc<InMemoryProductCatalog>,
  pub orders: Arc<InMemoryOrderLedger>,
}

impl Fixture {
  pub fn new() -> Self {
    let customer = Customer::new("Ada Lovelace", "ada@example.com");
    let p1 = CatalogProduct::new("Mug", 10, 5);
    let p2 = CatalogProduct::new("Teapot", 20, 3);
    Self {
      customers: Arc::new(InMemoryCustomerDirectory::with_customers([customer.clone()])),
      catalog: Arc::new(InMemoryProductCatalog::with_products([p1.clone(), p2.clone()])),
      orders: Arc::new(InMemoryOrderLedger::new()),
      customer,
      p1,
      p2,
    }
  }

  pub fn repositories_with(&self, products: Arc<dyn ProductCatalog>, mode: StockUpdateMode) -> Repositories {
    Repositories::new(
      self.customers.clone(),
      products,
      self.orders.clone(),
      WorkflowConfig {
        stock_update_mode: mode,
      },
    )
  }

  pub fn workflow(&self, mode: StockUpdateMode) -> OrderCreationWorkflow {
    self.workflow_with(self.catalog.clone(), mode)
  }

  pub fn workflow_with(&self, products: Arc<dyn ProductCatalog>, mode: StockUpdateMode) -> OrderCreationWorkflow {
    OrderCreationWorkflow::new(self.repositories_with(products, mode)).unwrap()
  }

  pub fn request(&self, items: &[(Uuid, i32)]) -> OrderRequest {
    OrderRequest {
      customer_id: self.customer.id,
      products: items
        .iter()
        .map(|(id, quantity)| RequestedProduct {
          id: *id,
          quantity: *quantity,
        })
        .collect(),
    }
  }

  pub fn stock(&self, product: &CatalogProduct) -> i32 {
    self.catalog.quantity_of(product.id).unwrap()
  }
}
