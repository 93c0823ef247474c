//! Small worked examples of value-first and function-first composition.
//!
//! [`transforms`] holds the building blocks used throughout the lessons,
//! each one assembled with `pipe!` or `flow!` from smaller functions.
//! [`exercises`] holds hand-written versions of the composers themselves.

pub mod exercises;
pub mod transforms;

pub mod prelude {
    pub use crate::exercises::{flow_all, flow_pair, pipe_all};
    pub use crate::transforms::*;
}
