// order_service/src/lib.rs

//! Order creation over three collaborators: a customer directory, a product catalog
//! and an order ledger. `OrderCreationWorkflow` runs the `create_order` pipeline.

pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod repositories;
pub mod seed;
pub mod state;
pub mod workflow;

pub use config::{AppConfig, StockUpdateMode, WorkflowConfig};
pub use errors::{AppError, Result};
pub use state::Repositories;
pub use workflow::OrderCreationWorkflow;
