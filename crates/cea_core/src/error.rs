use std::fmt;

use crate::model::NodeId;

/// Errors raised while evaluating a decision model.
///
/// An absent variable is deliberately *not* an error: it resolves to 0.0,
/// which is what lets sensitivity sweeps run with partial variable sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A branch or caller referenced a node id with no corresponding node.
    NodeNotFound(NodeId),
    /// A node's payload does not satisfy its declared kind, e.g. a cohort
    /// simulation requested on a node that carries no Markov payload.
    MalformedNode { id: NodeId, detail: &'static str },
    /// The evaluator re-entered a node already on the current recursion
    /// path. Cycles are not produced by normal authoring, but a guard beats
    /// unbounded recursion.
    CycleDetected(NodeId),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::NodeNotFound(id) => write!(f, "node {id} not found"),
            EvalError::MalformedNode { id, detail } => {
                write!(f, "node {id} is malformed: {detail}")
            }
            EvalError::CycleDetected(id) => {
                write!(f, "cycle detected at node {id}")
            }
        }
    }
}

impl std::error::Error for EvalError {}

pub type Result<T> = std::result::Result<T, EvalError>;
