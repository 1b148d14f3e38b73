// order_service/src/pipelines/contexts.rs

//! Underlying data of the order pipelines. Handlers receive it wrapped in
//! `orderflow::ContextData`.

use crate::models::{CatalogProduct, Customer, NewLineItem, Order, OrderRequest, QuantityUpdate};
use crate::state::Repositories;
use std::collections::HashMap;
use uuid::Uuid;

/// Everything one run of the create-order pipeline reads and produces.
#[derive(Clone)]
pub struct CreateOrderCtxData {
  pub repos: Repositories,
  pub request: OrderRequest,
  pub customer: Option<Customer>,
  // Catalog records as read during validation; reused when stock is written back.
  pub catalog_snapshot: Vec<CatalogProduct>,
  pub line_items: Vec<NewLineItem>,
  pub order: Option<Order>,
  pub quantity_updates: Vec<QuantityUpdate>,
}

impl CreateOrderCtxData {
  pub fn new(repos: Repositories, request: OrderRequest) -> Self {
    Self {
      repos,
      request,
      customer: None,
      catalog_snapshot: Vec::new(),
      line_items: Vec::new(),
      order: None,
      quantity_updates: Vec::new(),
    }
  }

  pub fn snapshot_by_id(&self) -> HashMap<Uuid, &CatalogProduct> {
    self.catalog_snapshot.iter().map(|p| (p.id, p)).collect()
  }
}
