// order_service/src/pipelines/mod.rs

//! Pipelines of the order service and the context data they run over.

pub mod contexts;
pub mod create_order_pipeline;
pub mod create_order_steps;

pub use contexts::CreateOrderCtxData;
pub use create_order_pipeline::build_create_order_pipeline;
