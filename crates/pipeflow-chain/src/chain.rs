//! Runtime-built chains over `serde_json::Value`.
//!
//! A [`Chain`] gives up compile-time checking of adjacent types in exchange
//! for arbitrary length and runtime assembly (see `pipeflow-recipe`). Typed
//! closures are adapted by deserializing their input and serializing their
//! output, so a step that receives the wrong kind of value fails with
//! [`FlowError::TypeMismatch`] on the first mismatched call.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use pipeflow_core::config::ChainConfig;
use pipeflow_core::error::{FlowError, Result};

/// A type-erased unary step.
pub type DynStep = Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// JSON kind of a value, used in type-mismatch messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Wrap a function over raw JSON values as a [`DynStep`].
pub fn value_step<F>(func: F) -> DynStep
where
    F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
{
    Arc::new(func)
}

/// Adapt a typed infallible function into a [`DynStep`].
pub fn typed_step<A, B, F>(name: impl Into<String>, func: F) -> DynStep
where
    A: DeserializeOwned,
    B: Serialize,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    try_typed_step(name, move |input: A| Ok(func(input)))
}

/// Adapt a typed fallible function into a [`DynStep`].
///
/// Errors returned by `func` are passed through as is.
///
/// JSON has no NaN or infinity: a non-finite `f64` in the output becomes
/// `null`, so the next typed step sees `"null"` as the found kind.
pub fn try_typed_step<A, B, F>(name: impl Into<String>, func: F) -> DynStep
where
    A: DeserializeOwned,
    B: Serialize,
    F: Fn(A) -> Result<B> + Send + Sync + 'static,
{
    let name = name.into();
    Arc::new(move |value: Value| {
        let found = kind_of(&value);
        let input: A = serde_json::from_value(value)
            .map_err(|_| FlowError::type_mismatch(name.as_str(), type_name::<A>(), found))?;
        let output = func(input)?;
        Ok(serde_json::to_value(output)?)
    })
}

#[derive(Clone)]
struct NamedStep {
    name: String,
    func: DynStep,
}

/// An ordered list of named dynamic steps.
#[derive(Clone, Default)]
pub struct Chain {
    config: ChainConfig,
    steps: Vec<NamedStep>,
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("config", &self.config)
            .field("steps", &self.step_names())
            .finish()
    }
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ChainConfig) -> Self {
        Self {
            config,
            steps: Vec::new(),
        }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Append an already type-erased step.
    pub fn push(&mut self, name: impl Into<String>, func: DynStep) {
        self.steps.push(NamedStep {
            name: name.into(),
            func,
        });
    }

    /// Append a step that works on raw JSON values.
    pub fn then_value<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.push(name, value_step(func));
        self
    }

    /// Append a typed infallible step.
    pub fn then<A, B, F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        A: DeserializeOwned,
        B: Serialize,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let name = name.into();
        let step = typed_step(name.clone(), func);
        self.push(name, step);
        self
    }

    /// Append a typed fallible step.
    pub fn try_then<A, B, F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        A: DeserializeOwned,
        B: Serialize,
        F: Fn(A) -> Result<B> + Send + Sync + 'static,
    {
        let name = name.into();
        let step = try_typed_step(name.clone(), func);
        self.push(name, step);
        self
    }

    /// Append every step of `other`, keeping this chain's config.
    pub fn append(mut self, other: Chain) -> Self {
        self.steps.extend(other.steps);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }

    /// Check the chain length against the arity rules.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(FlowError::InvalidArity { min: 1, got: 0 });
        }
        if let Some(max) = self.config.max_steps
            && self.steps.len() > max
        {
            return Err(FlowError::TooManySteps {
                len: self.steps.len(),
                max,
            });
        }
        Ok(())
    }

    /// Feed `seed` through every step, left to right.
    pub fn run(&self, seed: Value) -> Result<Value> {
        self.validate()?;
        self.fold(seed)
    }

    /// Like [`run`](Self::run) with typed ends.
    ///
    /// A final value that does not deserialize as `R` is reported as a
    /// type mismatch in the pseudo-step `<output>`.
    pub fn run_typed<A, R>(&self, seed: A) -> Result<R>
    where
        A: Serialize,
        R: DeserializeOwned,
    {
        let output = self.run(serde_json::to_value(seed)?)?;
        let found = kind_of(&output);
        serde_json::from_value(output)
            .map_err(|_| FlowError::type_mismatch("<output>", type_name::<R>(), found))
    }

    /// Validate once and turn the chain into a reusable function.
    pub fn into_flow(self) -> Result<impl Fn(Value) -> Result<Value> + Send + Sync> {
        self.validate()?;
        Ok(move |seed: Value| self.fold(seed))
    }

    fn fold(&self, seed: Value) -> Result<Value> {
        let span = tracing::debug_span!(
            "chain",
            name = self.config.display_name(),
            chain_id = %self.config.chain_id,
            run_id = %Uuid::new_v4(),
            steps = self.steps.len(),
        );
        let _guard = span.enter();

        let mut value = seed;
        for (index, step) in self.steps.iter().enumerate() {
            tracing::trace!(index, step = %step.name, input = kind_of(&value), "applying step");
            value = (step.func)(value)?;
        }
        Ok(value)
    }
}
