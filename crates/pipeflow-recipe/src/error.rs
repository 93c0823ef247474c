use pipeflow_core::error::FlowError;
use thiserror::Error;

/// Recipe-specific error type.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Recipe parse error: {0}")]
    Parse(String),

    #[error("Recipe validation error: {0}")]
    Validation(String),

    #[error("Unknown step type: '{step_type}'")]
    UnknownStepType { step_type: String },

    #[error("Invalid config for step '{step}': {message}")]
    InvalidConfig { step: String, message: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl RecipeError {
    pub fn invalid_config(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            step: step.into(),
            message: message.into(),
        }
    }
}

impl From<RecipeError> for FlowError {
    fn from(e: RecipeError) -> Self {
        match e {
            RecipeError::Flow(inner) => inner,
            other => FlowError::Other(other.to_string()),
        }
    }
}
