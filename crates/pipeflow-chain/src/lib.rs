pub mod chain;
pub mod lambda;
pub mod sequence;

pub mod prelude {
    pub use crate::chain::{Chain, DynStep, kind_of, try_typed_step, typed_step, value_step};
    pub use crate::lambda::{AsyncLambda, FnStep, step};
    pub use crate::sequence::{RunnableSequence, StepSequence};
}
