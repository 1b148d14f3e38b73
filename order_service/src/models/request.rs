// order_service/src/models/request.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedProduct {
  pub id: Uuid,
  pub quantity: i32,
}

/// What a caller asks for: a customer and the products to order, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
  pub customer_id: Uuid,
  pub products: Vec<RequestedProduct>,
}

impl OrderRequest {
  pub fn product_ids(&self) -> Vec<Uuid> {
    self.products.iter().map(|p| p.id).collect()
  }
}
