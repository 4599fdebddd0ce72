//! Integration tests for the analysis engine
//!
//! Tests are organized by topic:
//! - `rollback` - Expected-value rollback over terminal/chance/decision trees
//! - `markov` - Cohort simulation and half-cycle policies
//! - `sensitivity` - One-way sweeps and tornado ordering

mod rollback;

use crate::model::{Branch, Node, NodeId, NodePayload, Value, Variables};

pub fn vars<const N: usize>(pairs: [(&str, f64); N]) -> Variables {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// A branch with no target: its own cost/effectiveness are the outcome.
pub fn leaf_branch(
    id: &str,
    name: &str,
    cost: impl Into<Value>,
    effectiveness: impl Into<Value>,
) -> Branch {
    let mut branch = Branch::new(id, name);
    branch.cost = cost.into();
    branch.effectiveness = effectiveness.into();
    branch
}

/// A branch linked to a child node, weighted by `probability`.
pub fn linked_branch(id: &str, name: &str, probability: impl Into<Value>, target: &str) -> Branch {
    let mut branch = Branch::new(id, name);
    branch.probability = probability.into();
    branch.target = Some(NodeId::from(target));
    branch
}

/// A terminal node with a single outcome branch.
pub fn terminal(id: &str, cost: impl Into<Value>, effectiveness: impl Into<Value>) -> Node {
    Node::new(
        id,
        NodePayload::Terminal(vec![leaf_branch(
            &format!("{id}-out"),
            "outcome",
            cost,
            effectiveness,
        )]),
    )
}
