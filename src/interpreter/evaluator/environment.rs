use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The flat mapping from variable names to values.
///
/// There is exactly one environment per [`Context`](super::core::Context):
/// blocks and loop bodies read and write it directly, and it survives across
/// calls to `interpret` until it is cleared.
///
/// # Example
/// ```
/// use rlite::interpreter::{evaluator::environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// env.set("x", Value::from(5));
/// env.set("x", Value::from(6));
///
/// assert_eq!(env.get("x"), Some(&Value::from(6)));
/// assert_eq!(env.len(), 1);
///
/// env.clear();
/// assert!(env.get("x").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_string(), value);
        }
    }

    /// Removes every binding. The environment itself stays the same object.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
