//! The wired decision model the engine evaluates

use rustc_hash::FxHashMap;

use crate::error::{EvalError, Result};

use super::ids::NodeId;
use super::nodes::Node;

/// A set of nodes indexed by id, with branch targets already resolved.
///
/// The engine receives this fully wired: turning an editor's node/edge
/// list into branch targets, and picking the root, are the caller's job.
/// Cycles are not validated at construction; the evaluator guards against
/// them at traversal time.
#[derive(Debug, Clone, Default)]
pub struct DecisionModel {
    nodes: FxHashMap<NodeId, Node>,
}

impl DecisionModel {
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        DecisionModel {
            nodes: nodes
                .into_iter()
                .map(|node| (node.id.clone(), node))
                .collect(),
        }
    }

    /// Look up a node, failing with [`EvalError::NodeNotFound`] when the id
    /// has no corresponding node.
    pub fn node(&self, id: &NodeId) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| EvalError::NodeNotFound(id.clone()))
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
