// orderflow/src/lib.rs

//! orderflow: a small asynchronous step-pipeline engine.
//!
//! A `Pipeline<TData, Err>` is an ordered list of named steps. Each step can carry
//! `before`, `on` and `after` handlers which run against a shared, lockable
//! `ContextData<TData>`. Steps may be optional or carry a skip condition, and any
//! handler can halt the run early with `PipelineControl::Stop` or fail it with `Err`.

pub mod core;
pub mod error;
pub mod pipeline;

pub use crate::core::context::Handler;
pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::{SkipCondition, StepDef};

pub use crate::pipeline::definition::Pipeline;

pub use crate::error::{FlowError, FlowResult};

/*
    Typical use:
    1. Define a context struct `MyCtx` holding the inputs, collaborators and
       intermediate results of the process.
    2. Create a `Pipeline<MyCtx, MyError>` with its steps, where
       `MyError: From<FlowError>`.
    3. Register async handlers with `.on_root()`, `.before_root()`, `.after_root()`.
    4. Build `ContextData::new(my_ctx)`, call `pipeline.run(ctx.clone()).await`,
       then read the results back out of `ctx`.
*/
