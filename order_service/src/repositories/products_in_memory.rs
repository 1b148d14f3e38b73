// order_service/src/repositories/products_in_memory.rs

use anyhow::bail;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::ProductCatalog;
use crate::models::{CatalogProduct, QuantityUpdate};

/// Write calls received by the catalog, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWrite {
  Overwrite(Vec<QuantityUpdate>),
  Decrement(Vec<QuantityUpdate>),
}

#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
  products: RwLock<HashMap<Uuid, CatalogProduct>>,
  writes: Mutex<Vec<CatalogWrite>>,
}

impl InMemoryProductCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_products(products: impl IntoIterator<Item = CatalogProduct>) -> Self {
    let catalog = Self::new();
    for product in products {
      catalog.insert(product);
    }
    catalog
  }

  pub fn insert(&self, product: CatalogProduct) {
    self.products.write().insert(product.id, product);
  }

  pub fn get(&self, id: Uuid) -> Option<CatalogProduct> {
    self.products.read().get(&id).cloned()
  }

  pub fn quantity_of(&self, id: Uuid) -> Option<i32> {
    self.products.read().get(&id).map(|p| p.quantity)
  }

  pub fn writes(&self) -> Vec<CatalogWrite> {
    self.writes.lock().clone()
  }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
  async fn find_all_by_id(&self, ids: &[Uuid]) -> anyhow::Result<Vec<CatalogProduct>> {
    let products = self.products.read();
    let mut found: Vec<CatalogProduct> = Vec::with_capacity(ids.len());
    for id in ids {
      if found.iter().any(|p| p.id == *id) {
        continue;
      }
      if let Some(product) = products.get(id) {
        found.push(product.clone());
      }
    }
    debug!(requested = ids.len(), found = found.len(), "Catalog lookup.");
    Ok(found)
  }

  async fn update_quantity(&self, updates: &[QuantityUpdate]) -> anyhow::Result<()> {
    let mut products = self.products.write();
    if let Some(missing) = updates.iter().find(|u| !products.contains_key(&u.id)) {
      bail!("Cannot update quantity of unknown product {}", missing.id);
    }
    let now = Utc::now();
    for update in updates {
      if let Some(product) = products.get_mut(&update.id) {
        product.quantity = update.quantity;
        product.updated_at = now;
      }
    }
    self.writes.lock().push(CatalogWrite::Overwrite(updates.to_vec()));
    Ok(())
  }

  async fn decrement_quantity(&self, updates: &[QuantityUpdate]) -> anyhow::Result<()> {
    // Checked and applied under one write lock so a batch is all-or-nothing.
    let mut products = self.products.write();
    let mut remaining: HashMap<Uuid, i32> = HashMap::new();
    for update in updates {
      let Some(product) = products.get(&update.id) else {
        bail!("Cannot decrement quantity of unknown product {}", update.id);
      };
      let left = remaining.entry(update.id).or_insert(product.quantity);
      *left -= update.quantity;
      if *left < 0 {
        bail!("Stock of product {} would drop below zero", update.id);
      }
    }
    let now = Utc::now();
    for (id, quantity) in remaining {
      if let Some(product) = products.get_mut(&id) {
        product.quantity = quantity;
        product.updated_at = now;
      }
    }
    self.writes.lock().push(CatalogWrite::Decrement(updates.to_vec()));
    Ok(())
  }
}
