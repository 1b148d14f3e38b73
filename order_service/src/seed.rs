// order_service/src/seed.rs

//! Seed data for the in-memory collaborators, as loaded by the demo binary.

use crate::config::WorkflowConfig;
use crate::errors::{AppError, Result as AppResult};
use crate::models::{CatalogProduct, Customer};
use crate::repositories::{InMemoryCustomerDirectory, InMemoryOrderLedger, InMemoryProductCatalog};
use crate::state::Repositories;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCustomer {
  pub id: Uuid,
  pub name: String,
  pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedProduct {
  pub id: Uuid,
  pub name: String,
  pub price_cents: i64,
  pub quantity: i32,
}

/// Customers and products to load before the first request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
  #[serde(default)]
  pub customers: Vec<SeedCustomer>,
  #[serde(default)]
  pub products: Vec<SeedProduct>,
}

impl SeedData {
  pub fn from_json(raw: &str) -> AppResult<Self> {
    serde_json::from_str(raw).map_err(|e| AppError::Config(format!("Invalid seed data: {}", e)))
  }

  pub fn load(path: &Path) -> AppResult<Self> {
    let raw = fs::read_to_string(path)
      .map_err(|e| AppError::Config(format!("Cannot read seed file {}: {}", path.display(), e)))?;
    Self::from_json(&raw)
  }
}

/// In-memory collaborators built from `SeedData`. Keeps the concrete types so callers
/// can read stock and orders back after running the workflow.
pub struct SeededCollaborators {
  pub customers: Arc<InMemoryCustomerDirectory>,
  pub products: Arc<InMemoryProductCatalog>,
  pub orders: Arc<InMemoryOrderLedger>,
}

impl SeededCollaborators {
  pub fn from_seed(seed: SeedData) -> Self {
    let customers = seed.customers.into_iter().map(|c| {
      let mut customer = Customer::new(c.name, c.email);
      customer.id = c.id;
      customer
    });
    let products = seed.products.into_iter().map(|p| {
      let mut product = CatalogProduct::new(p.name, p.price_cents, p.quantity);
      product.id = p.id;
      product
    });

    let seeded = Self {
      customers: Arc::new(InMemoryCustomerDirectory::with_customers(customers)),
      products: Arc::new(InMemoryProductCatalog::with_products(products)),
      orders: Arc::new(InMemoryOrderLedger::new()),
    };
    info!("In-memory collaborators seeded.");
    seeded
  }

  pub fn repositories(&self, config: WorkflowConfig) -> Repositories {
    Repositories::new(
      self.customers.clone(),
      self.products.clone(),
      self.orders.clone(),
      config,
    )
  }
}
