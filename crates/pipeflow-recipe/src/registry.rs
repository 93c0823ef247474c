use std::collections::HashMap;
use std::sync::Arc;

use pipeflow_chain::chain::{DynStep, kind_of, typed_step, value_step};
use pipeflow_core::error::FlowError;
use regex::Regex;
use serde_json::{Number, Value};

use crate::error::RecipeError;

/// Factory function signature: (step_id, config) -> DynStep.
pub type StepFactory =
    Arc<dyn Fn(&str, &HashMap<String, Value>) -> Result<DynStep, RecipeError> + Send + Sync>;

/// Registry mapping step type strings to factory functions.
pub struct StepRegistry {
    step_factories: HashMap<String, StepFactory>,
}

impl StepRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            step_factories: HashMap::new(),
        }
    }

    /// Create a registry pre-loaded with builtin step types.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("identity", identity_factory());
        registry.register("trim", string_map_factory(|s| s.trim().to_string()));
        registry.register("uppercase", string_map_factory(|s| s.to_uppercase()));
        registry.register("lowercase", string_map_factory(|s| s.to_lowercase()));
        registry.register("prepend", prepend_factory());
        registry.register("append", append_factory());
        registry.register("replace", replace_factory());
        registry.register("split_words", split_words_factory());
        registry.register("join", join_factory());
        registry.register("reverse", reverse_factory());
        registry.register("length", length_factory());
        registry.register("add", arithmetic_factory("amount", i128::checked_add, |a, b| a + b));
        registry.register(
            "multiply",
            arithmetic_factory("factor", i128::checked_mul, |a, b| a * b),
        );
        registry
    }

    /// Register a step factory for a given type name.
    pub fn register(&mut self, type_name: impl Into<String>, factory: StepFactory) {
        self.step_factories.insert(type_name.into(), factory);
    }

    /// Check if a step type is registered.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.step_factories.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.step_factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Create a step from the registry using the type name and config.
    pub fn create_step(
        &self,
        step_id: &str,
        step_type: &str,
        config: &HashMap<String, Value>,
    ) -> Result<DynStep, RecipeError> {
        let factory =
            self.step_factories
                .get(step_type)
                .ok_or_else(|| RecipeError::UnknownStepType {
                    step_type: step_type.to_string(),
                })?;
        factory(step_id, config)
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Box a closure as a [`StepFactory`].
pub fn step_factory<F>(f: F) -> StepFactory
where
    F: Fn(&str, &HashMap<String, Value>) -> Result<DynStep, RecipeError> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn required_str(
    step_id: &str,
    config: &HashMap<String, Value>,
    key: &str,
) -> Result<String, RecipeError> {
    match config.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(RecipeError::invalid_config(
            step_id,
            format!("'{key}' must be a string, found {}", kind_of(other)),
        )),
        None => Err(RecipeError::invalid_config(
            step_id,
            format!("missing field '{key}'"),
        )),
    }
}

fn optional_str(
    step_id: &str,
    config: &HashMap<String, Value>,
    key: &str,
    default: &str,
) -> Result<String, RecipeError> {
    if config.contains_key(key) {
        required_str(step_id, config, key)
    } else {
        Ok(default.to_string())
    }
}

fn required_number(
    step_id: &str,
    config: &HashMap<String, Value>,
    key: &str,
) -> Result<Number, RecipeError> {
    match config.get(key) {
        Some(Value::Number(n)) => Ok(n.clone()),
        Some(other) => Err(RecipeError::invalid_config(
            step_id,
            format!("'{key}' must be a number, found {}", kind_of(other)),
        )),
        None => Err(RecipeError::invalid_config(
            step_id,
            format!("missing field '{key}'"),
        )),
    }
}

/// Built-in identity factory: returns the input as-is.
fn identity_factory() -> StepFactory {
    step_factory(|_step_id, _config| Ok(value_step(Ok)))
}

/// String -> String factory with no configuration.
fn string_map_factory(map: fn(&str) -> String) -> StepFactory {
    step_factory(move |step_id, _config| {
        Ok(typed_step(step_id, move |s: String| map(&s)))
    })
}

/// Config: `prefix` (string, required).
fn prepend_factory() -> StepFactory {
    step_factory(|step_id, config| {
        let prefix = required_str(step_id, config, "prefix")?;
        Ok(typed_step(step_id, move |s: String| format!("{prefix}{s}")))
    })
}

/// Config: `suffix` (string, required).
fn append_factory() -> StepFactory {
    step_factory(|step_id, config| {
        let suffix = required_str(step_id, config, "suffix")?;
        Ok(typed_step(step_id, move |s: String| s + &suffix))
    })
}

/// Config: `pattern` (regex, required), `with` (string, default "").
fn replace_factory() -> StepFactory {
    step_factory(|step_id, config| {
        let pattern = required_str(step_id, config, "pattern")?;
        let replacement = optional_str(step_id, config, "with", "")?;
        let regex = Regex::new(&pattern).map_err(|e| {
            RecipeError::invalid_config(step_id, format!("invalid pattern: {e}"))
        })?;
        Ok(typed_step(step_id, move |s: String| {
            regex.replace_all(&s, replacement.as_str()).into_owned()
        }))
    })
}

fn split_words_factory() -> StepFactory {
    step_factory(|step_id, _config| {
        Ok(typed_step(step_id, |s: String| {
            s.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<String>>()
        }))
    })
}

/// Config: `separator` (string, default " ").
fn join_factory() -> StepFactory {
    step_factory(|step_id, config| {
        let separator = optional_str(step_id, config, "separator", " ")?;
        Ok(typed_step(step_id, move |parts: Vec<String>| {
            parts.join(&separator)
        }))
    })
}

/// Reverses a string (by chars) or an array.
fn reverse_factory() -> StepFactory {
    step_factory(|step_id, _config| {
        let name = step_id.to_string();
        Ok(value_step(move |value| match value {
            Value::String(s) => Ok(Value::String(s.chars().rev().collect())),
            Value::Array(mut items) => {
                items.reverse();
                Ok(Value::Array(items))
            }
            other => Err(FlowError::type_mismatch(
                name.as_str(),
                "string or array",
                kind_of(&other),
            )),
        }))
    })
}

/// Length of a string (in chars) or an array.
fn length_factory() -> StepFactory {
    step_factory(|step_id, _config| {
        let name = step_id.to_string();
        Ok(value_step(move |value| match value {
            Value::String(s) => Ok(Value::from(s.chars().count())),
            Value::Array(items) => Ok(Value::from(items.len())),
            other => Err(FlowError::type_mismatch(
                name.as_str(),
                "string or array",
                kind_of(&other),
            )),
        }))
    })
}

/// Binary arithmetic with a configured operand.
///
/// Integer inputs with an integer operand stay integers and fail when the
/// result leaves the `i64`/`u64` range; anything else is computed as `f64`.
fn arithmetic_factory(
    key: &'static str,
    int_op: fn(i128, i128) -> Option<i128>,
    float_op: fn(f64, f64) -> f64,
) -> StepFactory {
    step_factory(move |step_id, config| {
        let operand = required_number(step_id, config, key)?;
        let name = step_id.to_string();
        Ok(value_step(move |value| {
            let Value::Number(input) = &value else {
                return Err(FlowError::type_mismatch(
                    name.as_str(),
                    "number",
                    kind_of(&value),
                ));
            };
            if let (Some(a), Some(b)) = (as_integer(input), as_integer(&operand)) {
                return int_op(a, b)
                    .and_then(integer_value)
                    .ok_or_else(|| FlowError::Step(format!("integer overflow in '{name}'")));
            }
            let (a, b) = (
                input.as_f64().unwrap_or_default(),
                operand.as_f64().unwrap_or_default(),
            );
            Number::from_f64(float_op(a, b))
                .map(Value::Number)
                .ok_or_else(|| FlowError::Step(format!("non-finite result in '{name}'")))
        }))
    })
}

fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn integer_value(n: i128) -> Option<Value> {
    if let Ok(small) = i64::try_from(n) {
        Some(Value::from(small))
    } else {
        u64::try_from(n).ok().map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(step_type: &str, config: Value) -> DynStep {
        let config: HashMap<String, Value> = serde_json::from_value(config).unwrap();
        StepRegistry::with_builtins()
            .create_step("s1", step_type, &config)
            .unwrap()
    }

    #[test]
    fn registry_register_and_has_type() {
        let mut registry = StepRegistry::new();
        assert!(!registry.has_type("identity"));
        registry.register("identity", identity_factory());
        assert!(registry.has_type("identity"));
    }

    #[test]
    fn create_step_calls_the_registered_factory() {
        let mut registry = StepRegistry::new();
        registry.register(
            "square",
            step_factory(|id, _config| Ok(typed_step(id, |x: i64| x * x))),
        );
        let square = registry.create_step("sq", "square", &HashMap::new()).unwrap();
        assert_eq!(square(json!(9)).unwrap(), json!(81));
    }

    #[test]
    fn registry_with_builtins() {
        let registry = StepRegistry::with_builtins();
        assert_eq!(
            registry.type_names(),
            vec![
                "add",
                "append",
                "identity",
                "join",
                "length",
                "lowercase",
                "multiply",
                "prepend",
                "replace",
                "reverse",
                "split_words",
                "trim",
                "uppercase",
            ]
        );
    }

    #[test]
    fn create_step_unknown_type_errors() {
        let registry = StepRegistry::new();
        let result = registry.create_step("s1", "unknown", &HashMap::new());
        assert!(matches!(result, Err(RecipeError::UnknownStepType { .. })));
    }

    #[test]
    fn string_builtins() {
        assert_eq!(build("trim", json!({}))(json!("  hi  ")).unwrap(), json!("hi"));
        assert_eq!(build("uppercase", json!({}))(json!("hi")).unwrap(), json!("HI"));
        assert_eq!(build("lowercase", json!({}))(json!("HI")).unwrap(), json!("hi"));
        assert_eq!(
            build("prepend", json!({"prefix": ">> "}))(json!("hi")).unwrap(),
            json!(">> hi")
        );
        assert_eq!(
            build("append", json!({"suffix": "!"}))(json!("hi")).unwrap(),
            json!("hi!")
        );
    }

    #[test]
    fn replace_uses_regex() {
        let step = build("replace", json!({"pattern": "[^a-z0-9]+", "with": "-"}));
        assert_eq!(step(json!("hello, world")).unwrap(), json!("hello-world"));
    }

    #[test]
    fn replace_with_defaults_to_deletion() {
        let step = build("replace", json!({"pattern": "\\d"}));
        assert_eq!(step(json!("a1b2c3")).unwrap(), json!("abc"));
    }

    #[test]
    fn replace_rejects_bad_pattern() {
        let config: HashMap<String, Value> =
            serde_json::from_value(json!({"pattern": "("})).unwrap();
        let err = StepRegistry::with_builtins()
            .create_step("bad", "replace", &config)
            .err()
            .unwrap();
        assert!(matches!(err, RecipeError::InvalidConfig { ref step, .. } if step == "bad"));
    }

    #[test]
    fn missing_required_config_is_reported() {
        let err = StepRegistry::with_builtins()
            .create_step("bang", "append", &HashMap::new())
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Invalid config for step 'bang': missing field 'suffix'"
        );
    }

    #[test]
    fn wrong_config_type_is_reported() {
        let config: HashMap<String, Value> =
            serde_json::from_value(json!({"amount": "two"})).unwrap();
        let err = StepRegistry::with_builtins()
            .create_step("inc", "add", &config)
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Invalid config for step 'inc': 'amount' must be a number, found string"
        );
    }

    #[test]
    fn split_and_join() {
        let words = build("split_words", json!({}))(json!(" a  b c ")).unwrap();
        assert_eq!(words, json!(["a", "b", "c"]));
        let joined = build("join", json!({"separator": "-"}))(words).unwrap();
        assert_eq!(joined, json!("a-b-c"));
    }

    #[test]
    fn join_defaults_to_space() {
        let joined = build("join", json!({}))(json!(["x", "y"])).unwrap();
        assert_eq!(joined, json!("x y"));
    }

    #[test]
    fn reverse_and_length_accept_strings_and_arrays() {
        let reverse = build("reverse", json!({}));
        assert_eq!(reverse(json!("abc")).unwrap(), json!("cba"));
        assert_eq!(reverse(json!([1, 2, 3])).unwrap(), json!([3, 2, 1]));

        let length = build("length", json!({}));
        assert_eq!(length(json!("héllo")).unwrap(), json!(5));
        assert_eq!(length(json!([1, 2])).unwrap(), json!(2));
    }

    #[test]
    fn reverse_rejects_numbers() {
        let err = build("reverse", json!({}))(json!(3)).unwrap_err();
        assert!(matches!(
            err,
            FlowError::TypeMismatch { ref expected, ref found, .. }
                if expected == "string or array" && found == "number"
        ));
    }

    #[test]
    fn arithmetic_keeps_integers() {
        assert_eq!(build("add", json!({"amount": 2}))(json!(2)).unwrap(), json!(4));
        assert_eq!(build("multiply", json!({"factor": 2}))(json!(4)).unwrap(), json!(8));
    }

    #[test]
    fn arithmetic_falls_back_to_floats() {
        let half = build("multiply", json!({"factor": 0.5}));
        assert_eq!(half(json!(3)).unwrap(), json!(1.5));
    }

    #[test]
    fn arithmetic_overflow_is_a_step_error() {
        let err = build("add", json!({"amount": -1}))(json!(i64::MIN)).unwrap_err();
        assert!(matches!(err, FlowError::Step(ref msg) if msg.contains("overflow")));
    }

    #[test]
    fn arithmetic_handles_integers_above_i64() {
        let add_one = build("add", json!({"amount": 1}));
        assert_eq!(add_one(json!(i64::MAX)).unwrap(), json!(i64::MAX as u64 + 1));
        assert_eq!(add_one(json!(u64::MAX - 1)).unwrap(), json!(u64::MAX));

        let err = add_one(json!(u64::MAX)).unwrap_err();
        assert!(matches!(err, FlowError::Step(ref msg) if msg.contains("overflow")));

        let twice = build("multiply", json!({"factor": 2}));
        let err = twice(json!(u64::MAX / 2 + 1)).unwrap_err();
        assert!(matches!(err, FlowError::Step(ref msg) if msg.contains("overflow")));
        assert_eq!(twice(json!(-4)).unwrap(), json!(-8));
    }

    #[test]
    fn arithmetic_rejects_strings() {
        let err = build("add", json!({"amount": 1}))(json!("1")).unwrap_err();
        assert!(matches!(err, FlowError::TypeMismatch { ref step, .. } if step == "s1"));
    }

    #[test]
    fn typed_builtins_report_mismatch() {
        let err = build("uppercase", json!({}))(json!(42)).unwrap_err();
        assert!(matches!(err, FlowError::TypeMismatch { ref found, .. } if found == "number"));
    }
}
