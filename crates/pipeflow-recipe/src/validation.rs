use std::collections::HashSet;

use pipeflow_core::error::FlowError;

use crate::error::RecipeError;
use crate::registry::StepRegistry;
use crate::types::{RECIPE_VERSION, RecipeDocument};

/// Validate a recipe document against the given registry.
pub fn validate_document(doc: &RecipeDocument, registry: &StepRegistry) -> Result<(), RecipeError> {
    validate_version(doc)?;
    validate_arity(doc)?;
    validate_step_ids(doc)?;
    validate_step_types(doc, registry)?;
    Ok(())
}

fn validate_version(doc: &RecipeDocument) -> Result<(), RecipeError> {
    if doc.version != RECIPE_VERSION {
        return Err(RecipeError::Validation(format!(
            "Unsupported recipe version '{}', expected '{RECIPE_VERSION}'",
            doc.version
        )));
    }
    Ok(())
}

fn validate_arity(doc: &RecipeDocument) -> Result<(), RecipeError> {
    if doc.steps.is_empty() {
        return Err(FlowError::InvalidArity { min: 1, got: 0 }.into());
    }
    if let Some(max) = doc.max_steps
        && doc.steps.len() > max
    {
        return Err(FlowError::TooManySteps {
            len: doc.steps.len(),
            max,
        }
        .into());
    }
    Ok(())
}

fn validate_step_ids(doc: &RecipeDocument) -> Result<(), RecipeError> {
    let mut seen = HashSet::new();
    for step in &doc.steps {
        if step.id.trim().is_empty() {
            return Err(RecipeError::Validation("Step ID must not be empty".into()));
        }
        if !seen.insert(step.id.as_str()) {
            return Err(RecipeError::Validation(format!(
                "Duplicate step ID '{}'",
                step.id
            )));
        }
    }
    Ok(())
}

fn validate_step_types(doc: &RecipeDocument, registry: &StepRegistry) -> Result<(), RecipeError> {
    for step in &doc.steps {
        if !registry.has_type(&step.step_type) {
            return Err(RecipeError::UnknownStepType {
                step_type: step.step_type.clone(),
            });
        }
    }
    Ok(())
}
