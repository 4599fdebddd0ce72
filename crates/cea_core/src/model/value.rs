//! Symbolic-or-literal field values
//!
//! Most numeric fields in a model (probabilities, costs, utilities, cohort
//! shares) may hold either a constant or the name of a variable. Resolution
//! happens against a per-evaluation [`Variables`] mapping and never fails.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Variable-override mapping for one evaluation. Immutable per call;
/// sensitivity sweeps pass a different mapping per perturbation.
pub type Variables = FxHashMap<String, f64>;

/// A value that is either a literal number or a reference to a named
/// variable. The untagged representation matches the editor's
/// `number | string` wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Literal(f64),
    Variable(String),
}

impl Value {
    /// Resolve to a concrete number. A variable name absent from the
    /// mapping resolves to 0.0 — this permissiveness is deliberate and
    /// lets sweeps run with partial variable sets.
    pub fn resolve(&self, variables: &Variables) -> f64 {
        match self {
            Value::Literal(n) => *n,
            Value::Variable(name) => variables.get(name).copied().unwrap_or(0.0),
        }
    }

    pub fn literal(n: f64) -> Self {
        Value::Literal(n)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Value::Variable(name.into())
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Literal(0.0)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Literal(n)
    }
}

impl From<&str> for Value {
    fn from(name: &str) -> Self {
        Value::Variable(name.to_string())
    }
}
