//! Recursive expected-value rollback over decision trees

use rustc_hash::FxHashSet;

use crate::error::{EvalError, Result};
use crate::model::{Branch, DecisionModel, EvResult, NodeId, NodePayload, Variables};

/// Compute the expected (cost, effectiveness) of `node_id` by rolling the
/// tree back from its leaves.
///
/// - Terminal nodes yield their first branch's resolved cost/effectiveness,
///   or (0,0) with no branches.
/// - Chance nodes average their linked children weighted by resolved
///   probability, renormalized by the probability total (weights need not
///   sum to 1). Unlinked branches are skipped.
/// - Decision nodes pick the branch with strictly greatest effectiveness
///   (first seen wins ties) and report its name as `strategy`. An unlinked
///   branch is a leaf with its own cost/effectiveness.
/// - Markov nodes are not expanded during rollback and evaluate to (0,0);
///   a Markov root goes through [`crate::markov::simulate_markov`].
///
/// A node id with no node fails with [`EvalError::NodeNotFound`]; revisiting
/// a node already on the recursion path fails with
/// [`EvalError::CycleDetected`] instead of recursing forever.
pub fn evaluate(model: &DecisionModel, node_id: &NodeId, variables: &Variables) -> Result<EvResult> {
    let mut on_path = FxHashSet::default();
    evaluate_inner(model, node_id, variables, &mut on_path)
}

fn evaluate_inner(
    model: &DecisionModel,
    node_id: &NodeId,
    variables: &Variables,
    on_path: &mut FxHashSet<NodeId>,
) -> Result<EvResult> {
    if !on_path.insert(node_id.clone()) {
        return Err(EvalError::CycleDetected(node_id.clone()));
    }

    let node = model.node(node_id)?;
    let result = match &node.payload {
        NodePayload::Terminal(branches) => evaluate_terminal(branches, variables),
        NodePayload::Chance(branches) => evaluate_chance(model, branches, variables, on_path)?,
        NodePayload::Decision(branches) => evaluate_decision(model, branches, variables, on_path)?,
        NodePayload::Markov(_) => EvResult::ZERO,
    };

    on_path.remove(node_id);
    Ok(result)
}

fn evaluate_terminal(branches: &[Branch], variables: &Variables) -> EvResult {
    // Only the first branch is meaningful at a terminal node.
    match branches.first() {
        Some(branch) => EvResult::new(
            branch.cost.resolve(variables),
            branch.effectiveness.resolve(variables),
        ),
        None => EvResult::ZERO,
    }
}

fn evaluate_chance(
    model: &DecisionModel,
    branches: &[Branch],
    variables: &Variables,
    on_path: &mut FxHashSet<NodeId>,
) -> Result<EvResult> {
    let mut total_cost = 0.0;
    let mut total_effectiveness = 0.0;
    let mut total_probability = 0.0;

    for branch in branches {
        let Some(target) = &branch.target else {
            // Unlinked branches do not contribute at chance nodes.
            continue;
        };
        let probability = branch.probability.resolve(variables);
        let child = evaluate_inner(model, target, variables, on_path)?;
        total_cost += probability * child.cost;
        total_effectiveness += probability * child.effectiveness;
        total_probability += probability;
    }

    if total_probability > 0.0 {
        Ok(EvResult::new(
            total_cost / total_probability,
            total_effectiveness / total_probability,
        ))
    } else {
        Ok(EvResult::ZERO)
    }
}

fn evaluate_decision(
    model: &DecisionModel,
    branches: &[Branch],
    variables: &Variables,
    on_path: &mut FxHashSet<NodeId>,
) -> Result<EvResult> {
    let mut best: Option<(EvResult, &str)> = None;

    for branch in branches {
        let child = match &branch.target {
            Some(target) => evaluate_inner(model, target, variables, on_path)?,
            None => EvResult::new(
                branch.cost.resolve(variables),
                branch.effectiveness.resolve(variables),
            ),
        };

        // Strict > keeps the first occurrence of the maximum; selection is
        // by effectiveness alone, cost is carried through unweighed.
        let is_better = match &best {
            Some((current, _)) => child.effectiveness > current.effectiveness,
            None => true,
        };
        if is_better {
            best = Some((child, branch.name.as_str()));
        }
    }

    Ok(match best {
        Some((ev, name)) => EvResult {
            cost: ev.cost,
            effectiveness: ev.effectiveness,
            strategy: Some(name.to_string()),
        },
        None => EvResult::ZERO,
    })
}
