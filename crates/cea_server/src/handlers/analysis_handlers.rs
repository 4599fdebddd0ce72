use axum::Json;

use cea_core::model::{EvResult, SensitivityParam, TornadoResult, Variables};
use cea_core::{evaluate, one_way_sensitivity, simulate_markov};

use crate::api_types::AnalysisRequest;
use crate::error::ApiResult;

/// Fraction of the base value swept on each side in the default one-way
/// sensitivity policy.
const DEFAULT_SWEEP_FRACTION: f64 = 0.2;

pub async fn health() -> &'static str {
    "Decision analysis API is online and ready."
}

/// Roll back the submitted graph: cohort simulation when the root is a
/// Markov node, expected-value rollback otherwise.
pub async fn run_rollback_analysis(
    Json(req): Json<AnalysisRequest>,
) -> ApiResult<Json<EvResult>> {
    tracing::debug!(nodes = req.model.nodes.len(), "running rollback analysis");

    let (model, root) = req.model.into_decision_model()?;
    let result = if model.node(&root)?.payload.is_markov() {
        simulate_markov(&model, &root, &req.variables)?
    } else {
        evaluate(&model, &root, &req.variables)?
    };
    Ok(Json(result))
}

/// One-way sensitivity over every variable in the base mapping at ±20%.
/// The sweep policy lives here, not in the engine.
pub async fn run_sensitivity_analysis(
    Json(req): Json<AnalysisRequest>,
) -> ApiResult<Json<TornadoResult>> {
    tracing::debug!(
        nodes = req.model.nodes.len(),
        variables = req.variables.len(),
        "running one-way sensitivity analysis"
    );

    let (model, root) = req.model.into_decision_model()?;
    let params = default_sweep_params(&req.variables);
    let result = one_way_sensitivity(&model, &root, &req.variables, &params)?;
    Ok(Json(result))
}

/// ±20% around each base value. Variables are sorted by name so that
/// equal-spread tornado bars rank the same way on every run.
fn default_sweep_params(variables: &Variables) -> Vec<SensitivityParam> {
    let mut names: Vec<&String> = variables.keys().collect();
    names.sort();
    names
        .into_iter()
        .map(|name| SensitivityParam::around(name.clone(), variables[name], DEFAULT_SWEEP_FRACTION))
        .collect()
}
