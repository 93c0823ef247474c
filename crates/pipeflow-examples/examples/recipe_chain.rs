//! Build a chain from a YAML recipe and run it over a few titles.
//!
//! ```bash
//! RUST_LOG=pipeflow_chain=trace cargo run --example recipe_chain
//! ```

use pipeflow_core::error::FlowError;
use pipeflow_recipe::prelude::*;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SLUGIFY: &str = r#"
version: "1.0"
name: slugify
tags: [demo]
steps:
  - id: clean
    type: trim
  - id: lower
    type: lowercase
  - id: dashes
    type: replace
    config:
      pattern: "[^a-z0-9]+"
      with: "-"
"#;

const BROKEN: &str = r#"
version: "1.0"
name: broken
steps:
  - id: words
    type: split_words
  - id: loud
    type: uppercase
"#;

fn main() -> Result<(), RecipeError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_chain=info,pipeflow_recipe=debug".into()),
        )
        .init();

    let builder = RecipeBuilder::with_defaults();
    tracing::info!(types = ?builder.registry().type_names(), "registered step types");

    let slugify = builder.build_from_yaml(SLUGIFY)?;
    for title in ["Hello, World", "  Rust 2024 Edition  "] {
        let slug = slugify.run(json!(title))?;
        tracing::info!(title, %slug, "slugified");
    }

    // Adjacent steps that disagree on types only fail once the chain runs.
    let broken = builder.build_from_yaml(BROKEN)?;
    match broken.run(json!("a b c")) {
        Err(FlowError::TypeMismatch {
            step,
            expected,
            found,
        }) => tracing::info!(%step, %expected, %found, "type mismatch"),
        other => tracing::info!(?other, "unexpected result"),
    }

    Ok(())
}
