// Re-export from pipeflow-core where both sequence types are defined.
// `.pipe()` is provided by `StepExt` and `RunnableExt` in pipeflow-core.

pub use pipeflow_core::runnable::RunnableSequence;
pub use pipeflow_core::step::StepSequence;
