use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Configuration attached to a dynamic chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Human-readable chain name, used in trace output.
    #[serde(default)]
    pub name: Option<String>,

    /// Tags for filtering and categorization.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Upper bound on the number of steps. `None` means unbounded.
    #[serde(default)]
    pub max_steps: Option<usize>,

    /// Identifier of the chain itself. Each run gets its own run id on top.
    #[serde(default = "Uuid::new_v4")]
    pub chain_id: Uuid,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            name: None,
            tags: Vec::new(),
            max_steps: None,
            chain_id: Uuid::new_v4(),
        }
    }
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = Some(max);
        self
    }

    pub fn with_chain_id(mut self, chain_id: Uuid) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Name to show in logs; falls back to `"chain"`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("chain")
    }
}
