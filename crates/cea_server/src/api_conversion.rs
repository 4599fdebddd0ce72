//! Convert editor payloads into the engine's typed model
//!
//! This is the graph-construction phase the engine deliberately excludes:
//! wiring branch targets from the edge list (an edge's `sourceHandle`
//! names the branch it leaves through), locating the root (the node with
//! no incoming edge), and tightening the loose kind-tagged node data into
//! `cea_core`'s sum type, applying the editor's Markov defaults.

use std::collections::HashSet;

use cea_core::model::{
    Branch, BranchId, DecisionModel, MarkovModel, MarkovState, Node, NodeId, NodePayload,
};

use crate::api_types::{EditorBranch, EditorNode, EditorNodeData, GraphPayload, NodeTypeTag};
use crate::error::{ApiError, ApiResult};

const DEFAULT_TIME_HORIZON: u32 = 50;
const DEFAULT_CYCLE_LENGTH: f64 = 1.0;

impl GraphPayload {
    /// Wire targets, find the root, and build the typed model.
    pub fn into_decision_model(mut self) -> ApiResult<(DecisionModel, NodeId)> {
        self.wire_branch_targets();
        let root = self.find_root()?;
        let nodes = self
            .nodes
            .into_iter()
            .map(convert_node)
            .collect::<ApiResult<Vec<_>>>()?;
        Ok((DecisionModel::from_nodes(nodes), root))
    }

    /// Copy each edge's target onto the matching branch of its source
    /// node. Edges without a handle, or whose handle matches no branch,
    /// are ignored.
    fn wire_branch_targets(&mut self) {
        let edges = std::mem::take(&mut self.edges);
        for edge in &edges {
            let Some(handle) = &edge.source_handle else {
                continue;
            };
            let Some(node) = self.nodes.iter_mut().find(|n| n.id == edge.source) else {
                continue;
            };
            if let Some(branch) = node.data.branches.iter_mut().find(|b| b.id == *handle) {
                branch.target_node_id = Some(edge.target.clone());
            }
        }
        self.edges = edges;
    }

    /// The evaluation root is the node no edge points at.
    fn find_root(&self) -> ApiResult<NodeId> {
        let targets: HashSet<&str> = self.edges.iter().map(|e| e.target.as_str()).collect();
        self.nodes
            .iter()
            .find(|n| !targets.contains(n.id.as_str()))
            .map(|n| NodeId(n.id.clone()))
            .ok_or(ApiError::NoRootNode)
    }
}

fn convert_node(node: EditorNode) -> ApiResult<Node> {
    let id = node.id;
    let label = node.data.label.clone();
    let payload = match node.data.node_type {
        NodeTypeTag::Terminal => NodePayload::Terminal(convert_branches(node.data.branches)),
        NodeTypeTag::Chance => NodePayload::Chance(convert_branches(node.data.branches)),
        NodeTypeTag::Decision => NodePayload::Decision(convert_branches(node.data.branches)),
        NodeTypeTag::Markov => NodePayload::Markov(convert_markov(&id, node.data)?),
    };
    Ok(Node {
        id: NodeId(id),
        label,
        payload,
    })
}

fn convert_branches(branches: Vec<EditorBranch>) -> Vec<Branch> {
    branches
        .into_iter()
        .map(|b| Branch {
            id: BranchId(b.id),
            name: b.name,
            probability: b.probability,
            cost: b.cost,
            effectiveness: b.effectiveness,
            target: b.target_node_id.map(NodeId),
        })
        .collect()
}

fn convert_markov(id: &str, data: EditorNodeData) -> ApiResult<MarkovModel> {
    let states = data
        .states
        .ok_or_else(|| ApiError::validation("states", format!("markov node {id} has no states")))?;
    let transitions = data.transition_matrix.ok_or_else(|| {
        ApiError::validation(
            "transitionMatrix",
            format!("markov node {id} has no transition matrix"),
        )
    })?;

    Ok(MarkovModel {
        states: states
            .into_iter()
            .map(|s| MarkovState {
                name: s.name,
                cost: s.cost,
                utility: s.utility,
            })
            .collect(),
        transitions,
        time_horizon: data.time_horizon.unwrap_or(DEFAULT_TIME_HORIZON),
        cycle_length: data.cycle_length.unwrap_or(DEFAULT_CYCLE_LENGTH),
        initial_distribution: data.initial_distribution.unwrap_or_default(),
        half_cycle_correction: data.half_cycle_correction.unwrap_or(true),
    })
}
