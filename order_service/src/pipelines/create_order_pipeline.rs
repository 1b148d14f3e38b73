// order_service/src/pipelines/create_order_pipeline.rs

use crate::config::StockUpdateMode;
use crate::errors::AppError;
use crate::pipelines::contexts::CreateOrderCtxData;
use crate::pipelines::create_order_steps::*;
use orderflow::{ContextData, FlowResult, Pipeline, SkipCondition};
use std::sync::Arc;
use tracing::debug;

pub const RESOLVE_CUSTOMER: &str = "resolve_customer";
pub const LOAD_CATALOG_PRODUCTS: &str = "load_catalog_products";
pub const CHECK_PRODUCTS_EXIST: &str = "check_products_exist";
pub const CHECK_STOCK_AVAILABLE: &str = "check_stock_available";
// Runs after the catalog checks so their errors are reported first.
pub const VALIDATE_QUANTITIES: &str = "validate_quantities";
pub const BUILD_LINE_ITEMS: &str = "build_line_items";
pub const PERSIST_ORDER: &str = "persist_order";
pub const COMPUTE_STOCK_OVERWRITES: &str = "compute_stock_overwrites";
pub const WRITE_STOCK_OVERWRITES: &str = "write_stock_overwrites";
pub const DECREMENT_STOCK: &str = "decrement_stock";

/// Skips a step unless the run is configured with `mode`.
fn unless_stock_mode(mode: StockUpdateMode) -> SkipCondition<CreateOrderCtxData> {
  Arc::new(move |ctx_data: ContextData<CreateOrderCtxData>| ctx_data.read().repos.config.stock_update_mode != mode)
}

/// Builds the create-order pipeline. The stock write-back steps for both
/// `StockUpdateMode`s are present; each run skips the ones its configuration does not select.
pub fn build_create_order_pipeline() -> FlowResult<Pipeline<CreateOrderCtxData, AppError>> {
  let mut p = Pipeline::<CreateOrderCtxData, AppError>::new(&[
    (RESOLVE_CUSTOMER, false, None),
    (LOAD_CATALOG_PRODUCTS, false, None),
    (CHECK_PRODUCTS_EXIST, false, None),
    (CHECK_STOCK_AVAILABLE, false, None),
    (VALIDATE_QUANTITIES, false, None),
    (BUILD_LINE_ITEMS, false, None),
    (PERSIST_ORDER, false, None),
    (
      COMPUTE_STOCK_OVERWRITES,
      false,
      Some(unless_stock_mode(StockUpdateMode::Overwrite)),
    ),
    (
      WRITE_STOCK_OVERWRITES,
      false,
      Some(unless_stock_mode(StockUpdateMode::Overwrite)),
    ),
    (DECREMENT_STOCK, false, Some(unless_stock_mode(StockUpdateMode::Decrement))),
  ]);

  p.on_root(RESOLVE_CUSTOMER, resolve_customer_step)?;
  p.on_root(LOAD_CATALOG_PRODUCTS, load_catalog_products_step)?;
  p.on_root(CHECK_PRODUCTS_EXIST, check_products_exist_step)?;
  p.on_root(CHECK_STOCK_AVAILABLE, check_stock_available_step)?;
  p.on_root(VALIDATE_QUANTITIES, validate_quantities_step)?;
  p.on_root(BUILD_LINE_ITEMS, build_line_items_step)?;
  p.on_root(PERSIST_ORDER, persist_order_step)?;
  p.after_root(PERSIST_ORDER, log_persisted_order)?;
  p.on_root(COMPUTE_STOCK_OVERWRITES, compute_stock_overwrites_step)?;
  p.on_root(WRITE_STOCK_OVERWRITES, write_stock_overwrites_step)?;
  p.on_root(DECREMENT_STOCK, decrement_stock_step)?;

  debug!(steps = ?p.step_names(), "Create order pipeline built.");
  Ok(p)
}
