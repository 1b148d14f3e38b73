// orderflow/src/core/control.rs

//! Flow-control signals returned by handlers, and the outcome of a whole run.

/// Returned by a handler to say whether the run goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineControl {
  Continue,
  /// Halt the run now. Remaining handlers of this step and all later steps are not executed.
  Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
  /// Every step ran (or was skipped) without a handler stopping the run.
  Completed,
  /// A handler returned `PipelineControl::Stop`.
  Stopped,
}
