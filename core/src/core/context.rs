// orderflow/src/core/context.rs

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use std::future::Future;
use std::pin::Pin;

/// A registered step handler.
///
/// Handlers take a clone of the run's `ContextData<TData>`, do their work (usually
/// collaborator I/O) and tell the pipeline whether to continue. Take what you need out
/// of the context under a short-lived guard, drop the guard, then `.await`.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;
