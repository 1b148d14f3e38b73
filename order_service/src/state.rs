// order_service/src/state.rs
use crate::config::WorkflowConfig;
use crate::repositories::{CustomerDirectory, OrderLedger, ProductCatalog};
use std::sync::Arc;

/// Collaborators and settings shared by every run of the order workflow.
#[derive(Clone)]
pub struct Repositories {
  pub customers: Arc<dyn CustomerDirectory>,
  pub products: Arc<dyn ProductCatalog>,
  pub orders: Arc<dyn OrderLedger>,
  pub config: Arc<WorkflowConfig>,
}

impl Repositories {
  pub fn new(
    customers: Arc<dyn CustomerDirectory>,
    products: Arc<dyn ProductCatalog>,
    orders: Arc<dyn OrderLedger>,
    config: WorkflowConfig,
  ) -> Self {
    Self {
      customers,
      products,
      orders,
      config: Arc::new(config),
    }
  }
}
