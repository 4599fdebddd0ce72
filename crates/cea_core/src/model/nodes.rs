//! Nodes and branches of a decision model

use serde::{Deserialize, Serialize};

use super::ids::{BranchId, NodeId};
use super::markov::MarkovModel;
use super::value::Value;

/// A labeled edge out of a node.
///
/// Carries a resolvable probability (meaningful at chance nodes), a
/// resolvable cost/effectiveness pair, and optionally a link to a child
/// node. A branch with no target is a leaf: its own cost and effectiveness
/// are the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
    #[serde(default = "default_probability")]
    pub probability: Value,
    #[serde(default)]
    pub cost: Value,
    #[serde(default)]
    pub effectiveness: Value,
    /// Child node this branch leads to, if any. Linkage is resolved by the
    /// caller before the model reaches the engine.
    #[serde(default)]
    pub target: Option<NodeId>,
}

fn default_probability() -> Value {
    Value::Literal(1.0)
}

impl Branch {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Branch {
            id: BranchId(id.into()),
            name: name.into(),
            probability: default_probability(),
            cost: Value::default(),
            effectiveness: Value::default(),
            target: None,
        }
    }
}

/// Kind-specific payload of a node. Branch order matters: it is the
/// evaluation order, which decides decision-node tie-breaks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodePayload {
    /// A single deterministic outcome. Only the first branch is
    /// significant; terminal nodes have at most one meaningful branch.
    Terminal(Vec<Branch>),
    /// Mutually exclusive probabilistic outcomes, averaged by weight.
    Chance(Vec<Branch>),
    /// Alternative strategies; the branch with the greatest effectiveness
    /// wins.
    Decision(Vec<Branch>),
    /// A discrete-time cohort process evaluated by the Markov simulator.
    Markov(MarkovModel),
}

impl NodePayload {
    /// Kind tag, as the editor names it.
    pub fn kind(&self) -> &'static str {
        match self {
            NodePayload::Terminal(_) => "terminal",
            NodePayload::Chance(_) => "chance",
            NodePayload::Decision(_) => "decision",
            NodePayload::Markov(_) => "markov",
        }
    }

    pub fn is_markov(&self) -> bool {
        matches!(self, NodePayload::Markov(_))
    }
}

/// A node of the decision model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub label: String,
    pub payload: NodePayload,
}

impl Node {
    pub fn new(id: impl Into<String>, payload: NodePayload) -> Self {
        Node {
            id: NodeId(id.into()),
            label: String::new(),
            payload,
        }
    }
}
