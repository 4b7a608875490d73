use std::collections::HashMap;

use tracing::trace;

use crate::interpreter::value::core::Value;

/// The variables of a running program.
///
/// A single flat namespace: there are no nested scopes and no shadowing. The
/// same environment is reused across every chunk of source a session runs,
/// so variables survive from one REPL line to the next.
///
/// # Example
/// ```
/// use lofy::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// env.set("x", Value::Int(1));
/// env.set("x", Value::Int(2));
///
/// assert_eq!(env.get("x"), Value::Int(2));
/// assert_eq!(env.get("y"), Value::None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the value bound to `name`, or [`Value::None`] if the
    /// name was never assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        self.variables.get(name).cloned().unwrap_or_default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        trace!(name, %value, "assign");
        self.variables.insert(name.to_string(), value);
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
