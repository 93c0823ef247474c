use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Supported recipe schema version.
pub const RECIPE_VERSION: &str = "1.0";

/// Top-level recipe document.
#[derive(Debug, Deserialize)]
pub struct RecipeDocument {
    /// Schema version (currently "1.0").
    pub version: String,
    /// Recipe name, copied into the chain config.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional upper bound on the number of steps.
    #[serde(default)]
    pub max_steps: Option<usize>,
    /// Steps, applied in the order listed.
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
}

/// A step definition in the recipe.
#[derive(Debug, Deserialize)]
pub struct RecipeStep {
    /// Unique step identifier; used as the step name in the chain.
    pub id: String,
    /// Step type (must be registered in the StepRegistry).
    #[serde(rename = "type")]
    pub step_type: String,
    /// Step-specific configuration.
    #[serde(default)]
    pub config: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_minimal_yaml() {
        let yaml = r#"
version: "1.0"
steps:
  - id: clean
    type: trim
"#;
        let doc: RecipeDocument = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.version, "1.0");
        assert!(doc.name.is_none());
        assert!(doc.tags.is_empty());
        assert!(doc.max_steps.is_none());
        assert_eq!(doc.steps.len(), 1);
        assert_eq!(doc.steps[0].id, "clean");
        assert_eq!(doc.steps[0].step_type, "trim");
        assert!(doc.steps[0].config.is_empty());
    }

    #[test]
    fn deserialize_full_yaml() {
        let yaml = r#"
version: "1.0"
name: shout
description: Trim, uppercase and add a bang.
tags: [lesson, strings]
max_steps: 5
steps:
  - id: clean
    type: trim
  - id: bang
    type: append
    config:
      suffix: "!"
"#;
        let doc: RecipeDocument = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.name.as_deref(), Some("shout"));
        assert_eq!(doc.tags, vec!["lesson", "strings"]);
        assert_eq!(doc.max_steps, Some(5));
        assert_eq!(doc.steps[1].config["suffix"], json!("!"));
    }

    #[test]
    fn deserialize_json() {
        let doc: RecipeDocument = serde_json::from_str(
            r#"{"version": "1.0", "steps": [{"id": "x", "type": "add", "config": {"amount": 2}}]}"#,
        )
        .unwrap();
        assert_eq!(doc.steps[0].config["amount"], json!(2));
    }

    #[test]
    fn missing_steps_defaults_to_empty() {
        let doc: RecipeDocument = serde_yaml::from_str("version: \"1.0\"").unwrap();
        assert!(doc.steps.is_empty());
    }
}
