// orderflow/src/pipeline/mod.rs

//! `Pipeline<TData, Err>`: definition and step mutation, handler registration, execution.

pub mod definition;
pub mod execution;
pub mod hooks;

pub use definition::Pipeline;
