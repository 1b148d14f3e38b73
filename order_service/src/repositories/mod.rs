// order_service/src/repositories/mod.rs

//! Collaborators of the order workflow. Their storage is not this crate's concern;
//! the traits are what the workflow depends on, the in-memory types back the demo
//! binary and the tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{CatalogProduct, CreateOrderData, Customer, Order, QuantityUpdate};

pub mod customers_in_memory;
pub mod orders_in_memory;
pub mod products_in_memory;

pub use customers_in_memory::InMemoryCustomerDirectory;
pub use orders_in_memory::InMemoryOrderLedger;
pub use products_in_memory::{CatalogWrite, InMemoryProductCatalog};

#[async_trait]
pub trait CustomerDirectory: Send + Sync {
  async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Customer>>;
}

#[async_trait]
pub trait ProductCatalog: Send + Sync {
  /// Products matching `ids`. Unknown ids are left out, so the result may be shorter.
  async fn find_all_by_id(&self, ids: &[Uuid]) -> anyhow::Result<Vec<CatalogProduct>>;

  /// Overwrites each listed product's stock with the given quantity.
  async fn update_quantity(&self, updates: &[QuantityUpdate]) -> anyhow::Result<()>;

  /// Subtracts each listed quantity from the product's current stock in one operation.
  async fn decrement_quantity(&self, updates: &[QuantityUpdate]) -> anyhow::Result<()>;
}

#[async_trait]
pub trait OrderLedger: Send + Sync {
  /// Persists the order and returns it with the line items as stored.
  async fn create(&self, data: CreateOrderData) -> anyhow::Result<Order>;
}
