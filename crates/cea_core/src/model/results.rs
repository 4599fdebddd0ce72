//! Result types produced by the engine

use serde::{Deserialize, Serialize};

/// Expected (cost, effectiveness) pair for a node under one variable
/// assignment. `strategy` names the branch chosen at a decision root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvResult {
    pub cost: f64,
    pub effectiveness: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl EvResult {
    pub const ZERO: EvResult = EvResult {
        cost: 0.0,
        effectiveness: 0.0,
        strategy: None,
    };

    pub fn new(cost: f64, effectiveness: f64) -> Self {
        EvResult {
            cost,
            effectiveness,
            strategy: None,
        }
    }
}

/// A variable to perturb in a one-way sweep, with its low/high overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityParam {
    pub variable: String,
    pub low: f64,
    pub high: f64,
}

impl SensitivityParam {
    pub fn new(variable: impl Into<String>, low: f64, high: f64) -> Self {
        SensitivityParam {
            variable: variable.into(),
            low,
            high,
        }
    }

    /// A symmetric sweep around `base`, e.g. `fraction = 0.2` for ±20%.
    pub fn around(variable: impl Into<String>, base: f64, fraction: f64) -> Self {
        SensitivityParam {
            variable: variable.into(),
            low: base * (1.0 - fraction),
            high: base * (1.0 + fraction),
        }
    }
}

/// One bar of a tornado diagram: the outcome effectiveness at a variable's
/// low and high overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoBar {
    pub variable: String,
    pub low_impact: f64,
    pub high_impact: f64,
}

impl TornadoBar {
    /// Magnitude of the outcome swing; the tornado sort key.
    pub fn spread(&self) -> f64 {
        (self.high_impact - self.low_impact).abs()
    }
}

/// Ranked tornado bars plus the unperturbed base outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TornadoResult {
    pub base_outcome: f64,
    /// Sorted descending by [`TornadoBar::spread`]; ties keep the input
    /// parameter order.
    pub bars: Vec<TornadoBar>,
}
