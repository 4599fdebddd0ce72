//! Discrete-time Markov cohort simulation

use crate::error::{EvalError, Result};
use crate::matrix::{self, TransitionMatrix};
use crate::model::{DecisionModel, EvResult, MarkovModel, NodeId, NodePayload, Variables};

/// How the half-cycle-correction flag is honored.
///
/// The system this engine reimplements accumulated the full-cycle valuation,
/// then subtracted and re-added an average-cohort valuation when the flag
/// was set — two operations that cancel exactly, leaving the flag with no
/// net effect. `AsAuthored` preserves that behavior; `Averaged` is the
/// standard technique, valuing each cycle at the mean of the before/after
/// cohorts when the flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HalfCyclePolicy {
    #[default]
    AsAuthored,
    Averaged,
}

/// Run the cohort simulation for a `markov` node under the authored
/// half-cycle semantics (the flag has no net effect; see
/// [`HalfCyclePolicy`]).
pub fn simulate_markov(
    model: &DecisionModel,
    node_id: &NodeId,
    variables: &Variables,
) -> Result<EvResult> {
    simulate_markov_with(model, node_id, variables, HalfCyclePolicy::AsAuthored)
}

/// Run the cohort simulation with an explicit half-cycle policy.
///
/// Fails with [`EvalError::MalformedNode`] when the node does not carry a
/// Markov payload or declares no states. Returns accumulated
/// (total cost, total utility) as (cost, effectiveness); `strategy` is
/// never set.
pub fn simulate_markov_with(
    model: &DecisionModel,
    node_id: &NodeId,
    variables: &Variables,
    policy: HalfCyclePolicy,
) -> Result<EvResult> {
    let node = model.node(node_id)?;
    let NodePayload::Markov(markov) = &node.payload else {
        return Err(EvalError::MalformedNode {
            id: node_id.clone(),
            detail: "node does not carry a markov payload",
        });
    };
    if markov.states.is_empty() {
        return Err(EvalError::MalformedNode {
            id: node_id.clone(),
            detail: "markov node declares no states",
        });
    }

    let transitions = build_transition_matrix(markov, variables);

    let cost_vector: Vec<f64> = markov
        .states
        .iter()
        .map(|s| s.cost.resolve(variables))
        .collect();
    let utility_vector: Vec<f64> = markov
        .states
        .iter()
        .map(|s| s.utility.resolve(variables))
        .collect();

    let mut cohort = initial_cohort(markov, variables);

    let mut total_cost = 0.0;
    let mut total_utility = 0.0;

    for _cycle in 0..markov.time_horizon {
        // Valuation at the start of the cycle, then transition.
        let cycle_cost = matrix::dot(&cohort, &cost_vector) * markov.cycle_length;
        let cycle_utility = matrix::dot(&cohort, &utility_vector) * markov.cycle_length;
        let next_cohort = transitions.propagate(&cohort);

        match policy {
            // The authored correction subtracts the average-cohort valuation
            // and adds it straight back; the terms cancel, so the accumulation
            // stays the start-of-cycle one whatever the flag says.
            HalfCyclePolicy::AsAuthored => {
                total_cost += cycle_cost;
                total_utility += cycle_utility;
            }
            HalfCyclePolicy::Averaged if markov.half_cycle_correction => {
                let avg_cohort = matrix::mean_of(&cohort, &next_cohort);
                total_cost += matrix::dot(&avg_cohort, &cost_vector) * markov.cycle_length;
                total_utility += matrix::dot(&avg_cohort, &utility_vector) * markov.cycle_length;
            }
            HalfCyclePolicy::Averaged => {
                total_cost += cycle_cost;
                total_utility += cycle_utility;
            }
        }

        cohort = next_cohort;
    }

    Ok(EvResult::new(total_cost, total_utility))
}

/// Resolve the matrix entries in state order and row-normalize. A zero-sum
/// row stays all-zero (see [`TransitionMatrix::normalize_rows`]).
fn build_transition_matrix(markov: &MarkovModel, variables: &Variables) -> TransitionMatrix {
    let n = markov.states.len();
    let mut matrix = TransitionMatrix::zeros(n);

    for (from, from_state) in markov.states.iter().enumerate() {
        let Some(row_entries) = markov.transitions.get(&from_state.name) else {
            continue;
        };
        for (to, to_state) in markov.states.iter().enumerate() {
            if let Some(entry) = row_entries.get(&to_state.name) {
                matrix.set(from, to, entry.resolve(variables));
            }
        }
    }

    matrix.normalize_rows();
    matrix
}

/// Resolve the initial distribution in state order. A distribution that
/// sums to exactly 0 defaults the first state's share to 1.0 so the
/// simulation never starts degenerate; a nonzero distribution is used as
/// resolved, without renormalization.
fn initial_cohort(markov: &MarkovModel, variables: &Variables) -> Vec<f64> {
    let mut cohort: Vec<f64> = markov
        .states
        .iter()
        .map(|s| {
            markov
                .initial_distribution
                .get(&s.name)
                .map_or(0.0, |share| share.resolve(variables))
        })
        .collect();

    if cohort.iter().sum::<f64>() == 0.0 {
        cohort[0] = 1.0;
    }
    cohort
}
