//! Wire types for the visual editor's request payloads
//!
//! These mirror the editor's JSON exactly (camelCase, loose node `data`
//! with kind-dependent fields, separate edge list). The server converts
//! them into `cea_core`'s typed model in `api_conversion`.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use cea_core::model::{TransitionEntries, Value, Variables};

/// An analysis request: a graph as the editor holds it, plus the variable
/// overrides to evaluate under.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub model: GraphPayload,
    #[serde(default)]
    pub variables: Variables,
}

/// The editor's graph: nodes with kind-tagged data, and an edge list that
/// still needs wiring into branch targets.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<EditorNode>,
    #[serde(default)]
    pub edges: Vec<EditorEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorNode {
    pub id: String,
    pub data: EditorNodeData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorNodeData {
    #[serde(default)]
    pub label: String,
    pub node_type: NodeTypeTag,
    #[serde(default)]
    pub branches: Vec<EditorBranch>,
    // Markov-specific fields; validated in conversion when the kind
    // demands them.
    pub states: Option<Vec<EditorMarkovState>>,
    pub transition_matrix: Option<TransitionEntries>,
    pub time_horizon: Option<u32>,
    pub cycle_length: Option<f64>,
    pub initial_distribution: Option<FxHashMap<String, Value>>,
    pub half_cycle_correction: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeTypeTag {
    Decision,
    Chance,
    Terminal,
    Markov,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorBranch {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_probability")]
    pub probability: Value,
    #[serde(default)]
    pub cost: Value,
    #[serde(default)]
    pub effectiveness: Value,
    /// Usually absent on the wire; filled in from the edge list.
    #[serde(default)]
    pub target_node_id: Option<String>,
}

fn default_probability() -> Value {
    Value::Literal(1.0)
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorMarkovState {
    pub name: String,
    #[serde(default)]
    pub cost: Value,
    #[serde(default)]
    pub utility: Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorEdge {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_handle: Option<String>,
}
