// order_service/src/pipelines/create_order_steps.rs

//! Step handlers of the create-order pipeline.
//!
//! Every handler copies what it needs out of the context under a short read lock,
//! awaits its collaborator with no lock held, then writes its result back. Steps up to
//! `build_line_items_step` have no side effects.

use crate::errors::{AppError, Result as AppResult};
use crate::models::{CreateOrderData, NewLineItem, QuantityUpdate};
use crate::pipelines::contexts::CreateOrderCtxData;
use orderflow::{ContextData, PipelineControl};
use std::collections::HashSet;
use tracing::{info, instrument, warn};
use uuid::Uuid;

// Existence is checked before any step that looks products up in the snapshot.
fn missing_from_snapshot(product_id: Uuid) -> AppError {
  AppError::Internal(format!(
    "Requested product {} missing from the catalog snapshot after the existence check",
    product_id
  ))
}

#[instrument(name = "create_order::resolve_customer", skip_all, err(Display))]
pub async fn resolve_customer_step(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let (customer_id, customers) = {
    let guard = ctx_data.read();
    (guard.request.customer_id, guard.repos.customers.clone())
  };

  let customer = customers.find_by_id(customer_id).await?.ok_or_else(|| {
    warn!(%customer_id, "Create Order: customer not found.");
    AppError::InvalidCustomer
  })?;

  info!(%customer_id, "Create Order: customer resolved.");
  ctx_data.write().customer = Some(customer);
  Ok(PipelineControl::Continue)
}

#[instrument(name = "create_order::load_catalog_products", skip_all, err(Display))]
pub async fn load_catalog_products_step(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let (product_ids, products) = {
    let guard = ctx_data.read();
    (guard.request.product_ids(), guard.repos.products.clone())
  };

  let found = products.find_all_by_id(&product_ids).await?;
  info!(
    requested = product_ids.len(),
    found = found.len(),
    "Create Order: catalog products loaded."
  );
  ctx_data.write().catalog_snapshot = found;
  Ok(PipelineControl::Continue)
}

/// Reports the first requested id, in request order, that the catalog did not return.
#[instrument(name = "create_order::check_products_exist", skip_all, err(Display))]
pub async fn check_products_exist_step(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let guard = ctx_data.read();
  let known: HashSet<Uuid> = guard.catalog_snapshot.iter().map(|p| p.id).collect();

  if let Some(missing) = guard.request.products.iter().find(|p| !known.contains(&p.id)) {
    warn!(product_id = %missing.id, "Create Order: unknown product requested.");
    return Err(AppError::InvalidProduct(missing.id));
  }
  Ok(PipelineControl::Continue)
}

/// Reports the first requested item, in request order, asking for more than the catalog holds.
/// Each item is compared on its own; repeated ids are not summed.
#[instrument(name = "create_order::check_stock_available", skip_all, err(Display))]
pub async fn check_stock_available_step(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let guard = ctx_data.read();
  let snapshot = guard.snapshot_by_id();

  for item in &guard.request.products {
    let available = snapshot
      .get(&item.id)
      .map(|p| p.quantity)
      .ok_or_else(|| missing_from_snapshot(item.id))?;
    if item.quantity > available {
      warn!(
        product_id = %item.id,
        requested = item.quantity,
        available,
        "Create Order: insufficient stock."
      );
      return Err(AppError::InsufficientStock(item.id));
    }
  }
  Ok(PipelineControl::Continue)
}

/// Rejects the first item, in request order, with a quantity below one.
#[instrument(name = "create_order::validate_quantities", skip_all, err(Display))]
pub async fn validate_quantities_step(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let guard = ctx_data.read();
  if let Some(item) = guard.request.products.iter().find(|p| p.quantity <= 0) {
    warn!(product_id = %item.id, quantity = item.quantity, "Create Order: non-positive quantity requested.");
    return Err(AppError::InvalidQuantity {
      product_id: item.id,
      quantity: item.quantity,
    });
  }
  Ok(PipelineControl::Continue)
}

#[instrument(name = "create_order::build_line_items", skip_all, err(Display))]
pub async fn build_line_items_step(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let line_items = {
    let guard = ctx_data.read();
    let snapshot = guard.snapshot_by_id();
    let line_items = guard
      .request
      .products
      .iter()
      .map(|item| -> AppResult<NewLineItem> {
        let product = snapshot.get(&item.id).ok_or_else(|| missing_from_snapshot(item.id))?;
        Ok(NewLineItem {
          product_id: item.id,
          quantity: item.quantity,
          price_cents: product.price_cents,
        })
      })
      .collect::<AppResult<Vec<_>>>()?;
    line_items
  };

  ctx_data.write().line_items = line_items;
  Ok(PipelineControl::Continue)
}

#[instrument(name = "create_order::persist_order", skip_all, err(Display))]
pub async fn persist_order_step(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let (data, orders) = {
    let guard = ctx_data.read();
    let customer = guard
      .customer
      .clone()
      .ok_or_else(|| AppError::Internal("Customer must be resolved before persisting the order".to_string()))?;
    (
      CreateOrderData {
        customer,
        products: guard.line_items.clone(),
      },
      guard.repos.orders.clone(),
    )
  };

  let order = orders.create(data).await?;
  ctx_data.write().order = Some(order);
  Ok(PipelineControl::Continue)
}

pub async fn log_persisted_order(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let order = ctx_data.map_read(|c| &c.order);
  if let Some(order) = &*order {
    info!(
      order_id = %order.id,
      customer_id = %order.customer.id,
      line_items = order.order_products.len(),
      total_cents = order.total_cents(),
      "Create Order: order persisted."
    );
  }
  Ok(PipelineControl::Continue)
}

/// New absolute stock per persisted line item: the quantity read during validation minus
/// the quantity the ledger recorded. The catalog is not read again, so stock sold by a
/// concurrent order in the meantime is overwritten.
#[instrument(name = "create_order::compute_stock_overwrites", skip_all, err(Display))]
pub async fn compute_stock_overwrites_step(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let updates = {
    let guard = ctx_data.read();
    let order = guard
      .order
      .as_ref()
      .ok_or_else(|| AppError::Internal("Order must be persisted before computing stock".to_string()))?;
    let snapshot = guard.snapshot_by_id();
    let updates = order
      .order_products
      .iter()
      .map(|line| -> AppResult<QuantityUpdate> {
        let product = snapshot.get(&line.product_id).ok_or_else(|| {
          AppError::Internal(format!(
            "Persisted line item references product {} missing from the catalog snapshot",
            line.product_id
          ))
        })?;
        Ok(QuantityUpdate {
          id: line.product_id,
          quantity: product.quantity - line.quantity,
        })
      })
      .collect::<AppResult<Vec<_>>>()?;
    updates
  };

  ctx_data.write().quantity_updates = updates;
  Ok(PipelineControl::Continue)
}

#[instrument(name = "create_order::write_stock_overwrites", skip_all, err(Display))]
pub async fn write_stock_overwrites_step(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let (updates, products) = {
    let guard = ctx_data.read();
    (guard.quantity_updates.clone(), guard.repos.products.clone())
  };

  products.update_quantity(&updates).await?;
  info!(products = updates.len(), "Create Order: stock overwritten.");
  Ok(PipelineControl::Continue)
}

/// Hands the persisted quantities to the catalog, which subtracts them from current stock.
#[instrument(name = "create_order::decrement_stock", skip_all, err(Display))]
pub async fn decrement_stock_step(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let (decrements, products) = {
    let guard = ctx_data.read();
    let order = guard
      .order
      .as_ref()
      .ok_or_else(|| AppError::Internal("Order must be persisted before decrementing stock".to_string()))?;
    let decrements: Vec<QuantityUpdate> = order
      .order_products
      .iter()
      .map(|line| QuantityUpdate {
        id: line.product_id,
        quantity: line.quantity,
      })
      .collect();
    (decrements, guard.repos.products.clone())
  };

  products.decrement_quantity(&decrements).await?;
  info!(products = decrements.len(), "Create Order: stock decremented.");
  ctx_data.write().quantity_updates = decrements;
  Ok(PipelineControl::Continue)
}
