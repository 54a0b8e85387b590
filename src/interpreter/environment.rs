use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The mutable name-to-value store of a session.
///
/// Each variable name maps to exactly one value. Assigning to a name that
/// already exists replaces its value; it never adds a second entry. The
/// environment is created once per session and handed to the evaluator by
/// mutable reference for every statement, so there is no hidden global state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    ///
    /// # Example
    /// ```
    /// use darja::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.get("x"), None);
    ///
    /// env.assign("x", Value::Integer(1));
    /// assert_eq!(env.get("x"), Some(&Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, creating or overwriting the entry.
    ///
    /// Returns the value previously bound to the name, if any.
    ///
    /// # Example
    /// ```
    /// use darja::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    ///
    /// env.assign("x", Value::Integer(10));
    /// let previous = env.assign("x", Value::Integer(20));
    ///
    /// assert_eq!(previous, Some(Value::Integer(10)));
    /// assert_eq!(env.len(), 1);
    /// ```
    pub fn assign(&mut self, name: &str, value: Value) -> Option<Value> {
        if let Some(slot) = self.variables.get_mut(name) {
            return Some(std::mem::replace(slot, value));
        }
        self.variables.insert(name.to_string(), value);
        None
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// The number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All bindings, sorted by name.
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, &Value)> {
        let mut bindings: Vec<_> = self.variables
                                       .iter()
                                       .map(|(name, value)| (name.as_str(), value))
                                       .collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}
