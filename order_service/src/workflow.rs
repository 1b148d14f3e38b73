// order_service/src/workflow.rs

use crate::errors::{AppError, Result as AppResult};
use crate::models::{Order, OrderRequest};
use crate::pipelines::{build_create_order_pipeline, CreateOrderCtxData};
use crate::state::Repositories;
use orderflow::{ContextData, Pipeline, PipelineResult};
use std::sync::Arc;
use tracing::{info, instrument};

/// Turns an `OrderRequest` into a persisted `Order` and writes the consumed stock back
/// to the catalog.
///
/// Validation failures are reported for the first offending item in request order and
/// leave every collaborator untouched. Once the order is persisted nothing is rolled
/// back: a failing stock write surfaces as an error while the order stays in the ledger.
///
/// Nothing is locked across collaborators. With `StockUpdateMode::Overwrite`, two
/// executions ordering the same product concurrently may both validate against the
/// same stock and the later write wins, so one sale is not subtracted.
#[derive(Clone)]
pub struct OrderCreationWorkflow {
  repos: Repositories,
  pipeline: Arc<Pipeline<CreateOrderCtxData, AppError>>,
}

impl OrderCreationWorkflow {
  pub fn new(repos: Repositories) -> AppResult<Self> {
    let pipeline = build_create_order_pipeline()?;
    Ok(Self::with_pipeline(repos, pipeline))
  }

  /// Uses `pipeline` in place of the stock one, typically `build_create_order_pipeline()`
  /// with extra hooks registered on its steps.
  pub fn with_pipeline(repos: Repositories, pipeline: Pipeline<CreateOrderCtxData, AppError>) -> Self {
    Self {
      repos,
      pipeline: Arc::new(pipeline),
    }
  }

  pub fn repositories(&self) -> &Repositories {
    &self.repos
  }

  #[instrument(
    name = "OrderCreationWorkflow::execute",
    skip_all,
    fields(customer_id = %request.customer_id, products = request.products.len()),
    err(Display)
  )]
  pub async fn execute(&self, request: OrderRequest) -> AppResult<Order> {
    let ctx_data = ContextData::new(CreateOrderCtxData::new(self.repos.clone(), request));

    match self.pipeline.run(ctx_data.clone()).await? {
      PipelineResult::Completed => {}
      PipelineResult::Stopped => return Err(AppError::PipelineHalted),
    }

    let order = ctx_data
      .map_write(|c| &mut c.order)
      .take()
      .ok_or_else(|| AppError::Internal("Create order pipeline completed without an order".to_string()))?;
    info!(order_id = %order.id, total_cents = order.total_cents(), "Order created.");
    Ok(order)
  }
}
