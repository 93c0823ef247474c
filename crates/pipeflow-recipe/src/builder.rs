use pipeflow_chain::chain::Chain;
use pipeflow_core::config::ChainConfig;

use crate::error::RecipeError;
use crate::registry::StepRegistry;
use crate::types::RecipeDocument;
use crate::validation;

/// Builder that converts recipe documents into dynamic chains.
pub struct RecipeBuilder {
    registry: StepRegistry,
}

impl RecipeBuilder {
    /// Create a builder with the given registry.
    pub fn new(registry: StepRegistry) -> Self {
        Self { registry }
    }

    /// Create a builder with builtin step types pre-registered.
    pub fn with_defaults() -> Self {
        Self::new(StepRegistry::with_builtins())
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Build a `Chain` from a YAML string.
    pub fn build_from_yaml(&self, yaml_str: &str) -> Result<Chain, RecipeError> {
        let doc: RecipeDocument = serde_yaml::from_str(yaml_str)?;
        self.build(doc)
    }

    /// Build a `Chain` from a JSON string.
    pub fn build_from_json(&self, json_str: &str) -> Result<Chain, RecipeError> {
        let doc: RecipeDocument =
            serde_json::from_str(json_str).map_err(|e| RecipeError::Parse(e.to_string()))?;
        self.build(doc)
    }

    /// Build a `Chain` from a parsed recipe document.
    pub fn build(&self, doc: RecipeDocument) -> Result<Chain, RecipeError> {
        validation::validate_document(&doc, &self.registry)?;

        let mut config = ChainConfig::new();
        config.name = doc.name;
        config.tags = doc.tags;
        config.max_steps = doc.max_steps;

        let mut chain = Chain::with_config(config);
        for step_def in &doc.steps {
            let step = self
                .registry
                .create_step(&step_def.id, &step_def.step_type, &step_def.config)?;
            chain.push(step_def.id.as_str(), step);
        }

        tracing::debug!(
            name = chain.config().display_name(),
            steps = chain.len(),
            "built chain from recipe"
        );
        Ok(chain)
    }
}
