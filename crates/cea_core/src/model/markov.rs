//! Markov cohort model payload

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::value::Value;

/// Transition entries keyed by (from-state, to-state) name. Absent entries
/// are probability 0.
pub type TransitionEntries = FxHashMap<String, FxHashMap<String, Value>>;

/// One health state of a cohort model, with per-cycle cost and utility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkovState {
    pub name: String,
    #[serde(default)]
    pub cost: Value,
    #[serde(default)]
    pub utility: Value,
}

impl MarkovState {
    pub fn new(name: impl Into<String>, cost: impl Into<Value>, utility: impl Into<Value>) -> Self {
        MarkovState {
            name: name.into(),
            cost: cost.into(),
            utility: utility.into(),
        }
    }
}

/// Payload of a `markov` node: a discrete-time state-transition process
/// simulated over a fixed number of cycles.
///
/// State order is significant — it fixes the matrix/vector layout, and the
/// first state receives the whole cohort when the initial distribution
/// resolves to all zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkovModel {
    pub states: Vec<MarkovState>,
    #[serde(default)]
    pub transitions: TransitionEntries,
    /// Number of discrete cycles to simulate. Zero cycles is a valid
    /// (empty) simulation.
    pub time_horizon: u32,
    /// Duration multiplier applied to every per-cycle accumulation.
    #[serde(default = "default_cycle_length")]
    pub cycle_length: f64,
    /// Resolvable cohort share per state name. Absent states start at 0.
    #[serde(default)]
    pub initial_distribution: FxHashMap<String, Value>,
    #[serde(default = "default_half_cycle")]
    pub half_cycle_correction: bool,
}

fn default_cycle_length() -> f64 {
    1.0
}

fn default_half_cycle() -> bool {
    true
}
