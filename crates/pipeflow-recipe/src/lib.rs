//! Declarative chains.
//!
//! A recipe is a YAML (or JSON) document listing steps by type. The
//! [`RecipeBuilder`](builder::RecipeBuilder) validates it against a
//! [`StepRegistry`](registry::StepRegistry) and produces a
//! [`Chain`](pipeflow_chain::chain::Chain).

pub mod builder;
pub mod error;
pub mod registry;
pub mod types;
pub mod validation;

pub mod prelude {
    pub use crate::builder::RecipeBuilder;
    pub use crate::error::RecipeError;
    pub use crate::registry::{StepFactory, StepRegistry, step_factory};
    pub use crate::types::{RecipeDocument, RecipeStep};
}
