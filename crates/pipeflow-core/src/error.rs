use thiserror::Error;

/// Errors raised by the composer itself.
///
/// Failures coming from user-supplied functions are never wrapped: the typed
/// macros and functions return the caller's own error type unchanged, and
/// dynamic steps hand back whatever `FlowError` they produced.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Invalid arity: expected at least {min} step(s), got {got}")]
    InvalidArity { min: usize, got: usize },

    #[error("Too many steps: {len} exceeds the limit of {max}")]
    TooManySteps { len: usize, max: usize },

    #[error("Type mismatch in step '{step}': expected {expected}, found {found}")]
    TypeMismatch {
        step: String,
        expected: String,
        found: String,
    },

    #[error("Step failed: {0}")]
    Step(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl FlowError {
    pub fn type_mismatch(
        step: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            step: step.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
