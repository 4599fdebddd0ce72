//! One-way sensitivity analysis (tornado diagram)

use crate::error::Result;
use crate::evaluate::evaluate;
use crate::model::{
    DecisionModel, NodeId, SensitivityParam, TornadoBar, TornadoResult, Variables,
};

/// Re-evaluate the tree at each parameter's low and high overrides, holding
/// all other variables at their base values, and rank the resulting outcome
/// swings.
///
/// Bars are sorted descending by `|high_impact - low_impact|` — the defining
/// property of a tornado diagram. The sort is stable, so parameters with
/// equal spreads keep their input order. How `params` is chosen (e.g. every
/// base variable at ±20%) is the caller's policy; the sweep itself is
/// agnostic.
pub fn one_way_sensitivity(
    model: &DecisionModel,
    root_id: &NodeId,
    base_variables: &Variables,
    params: &[SensitivityParam],
) -> Result<TornadoResult> {
    let base_outcome = evaluate(model, root_id, base_variables)?.effectiveness;

    let mut bars = Vec::with_capacity(params.len());
    for param in params {
        let mut overridden = base_variables.clone();

        overridden.insert(param.variable.clone(), param.low);
        let low_impact = evaluate(model, root_id, &overridden)?.effectiveness;

        overridden.insert(param.variable.clone(), param.high);
        let high_impact = evaluate(model, root_id, &overridden)?.effectiveness;

        bars.push(TornadoBar {
            variable: param.variable.clone(),
            low_impact,
            high_impact,
        });
    }

    // Largest swing first; stable for equal spreads.
    bars.sort_by(|a, b| b.spread().total_cmp(&a.spread()));

    Ok(TornadoResult { base_outcome, bars })
}
