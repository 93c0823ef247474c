//! Function composition for people coming from mainstream typed languages.
//!
//! Two calling conventions are provided:
//!
//! - [`pipe!`]: value first. `pipe!(x, f, g, h)` is `h(g(f(x)))`.
//! - [`flow!`]: functions first. `flow!(f, g, h)` returns a closure that does
//!   the same thing once it is given an `x`.
//!
//! ```
//! use pipeflow_core::{flow, pipe};
//!
//! let add_two = |x: i32| x + 2;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(pipe!(2, add_two, double), 8);
//! assert_eq!(pipe!(3, add_two, double), 10);
//! assert_eq!(flow!(add_two, double)(2), 8);
//! ```

pub mod arity;
pub mod compose;
pub mod config;
pub mod error;
pub mod runnable;
pub mod step;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::arity::*;
    pub use crate::compose::identity;
    pub use crate::config::ChainConfig;
    pub use crate::error::{FlowError, Result};
    pub use crate::runnable::{Runnable, RunnableExt, RunnableSequence};
    pub use crate::step::{IdentityStep, Step, StepExt, StepSequence};
    pub use crate::{flow, pipe, try_flow, try_pipe};
}
