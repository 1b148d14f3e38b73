// order_service/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product as the catalog knows it. `quantity` is the available stock at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
  pub id: Uuid,
  pub name: String,
  pub price_cents: i64,
  pub quantity: i32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl CatalogProduct {
  pub fn new(name: impl Into<String>, price_cents: i64, quantity: i32) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name: name.into(),
      price_cents,
      quantity,
      created_at: now,
      updated_at: now,
    }
  }
}

/// Product id paired with a quantity.
///
/// For `ProductCatalog::update_quantity` the quantity is the new absolute stock; for
/// `ProductCatalog::decrement_quantity` it is the amount to take off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdate {
  pub id: Uuid,
  pub quantity: i32,
}
