// order_service/src/repositories/customers_in_memory.rs

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::CustomerDirectory;
use crate::models::Customer;

#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
  customers: RwLock<HashMap<Uuid, Customer>>,
}

impl InMemoryCustomerDirectory {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
    let directory = Self::new();
    for customer in customers {
      directory.insert(customer);
    }
    directory
  }

  pub fn insert(&self, customer: Customer) {
    self.customers.write().insert(customer.id, customer);
  }
}

#[async_trait]
impl CustomerDirectory for InMemoryCustomerDirectory {
  async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Customer>> {
    let found = self.customers.read().get(&id).cloned();
    debug!(customer_id = %id, found = found.is_some(), "Customer lookup.");
    Ok(found)
  }
}
