//! Tests for expected-value rollback over decision trees

use crate::error::EvalError;
use crate::evaluate::evaluate;
use crate::model::{
    Branch, DecisionModel, MarkovModel, MarkovState, Node, NodeId, NodePayload, Value, Variables,
};

use super::{leaf_branch, linked_branch, terminal, vars};

#[test]
fn terminal_without_branches_is_zero() {
    let model = DecisionModel::from_nodes([Node::new("t", NodePayload::Terminal(vec![]))]);
    let result = evaluate(&model, &NodeId::from("t"), &Variables::default()).unwrap();
    assert_eq!(result.cost, 0.0);
    assert_eq!(result.effectiveness, 0.0);
    assert_eq!(result.strategy, None);
}

#[test]
fn terminal_uses_only_the_first_branch() {
    let model = DecisionModel::from_nodes([Node::new(
        "t",
        NodePayload::Terminal(vec![
            leaf_branch("b1", "real", 10.0, 5.0),
            leaf_branch("b2", "ignored", 999.0, 999.0),
        ]),
    )]);
    let result = evaluate(&model, &NodeId::from("t"), &Variables::default()).unwrap();
    assert_eq!(result.cost, 10.0);
    assert_eq!(result.effectiveness, 5.0);
}

#[test]
fn terminal_resolves_variable_fields() {
    let model = DecisionModel::from_nodes([Node::new(
        "t",
        NodePayload::Terminal(vec![leaf_branch("b", "outcome", "c_drug", "u_drug")]),
    )]);
    let variables = vars([("c_drug", 1200.0), ("u_drug", 0.85)]);
    let result = evaluate(&model, &NodeId::from("t"), &variables).unwrap();
    assert_eq!(result.cost, 1200.0);
    assert_eq!(result.effectiveness, 0.85);

    // Absent variables resolve to 0.0, never fail.
    let result = evaluate(&model, &NodeId::from("t"), &Variables::default()).unwrap();
    assert_eq!(result.cost, 0.0);
    assert_eq!(result.effectiveness, 0.0);
}

/// Scenario A: a decision root over two leaf branches picks the higher
/// effectiveness and reports the branch name as strategy.
#[test]
fn decision_over_leaves_picks_highest_effectiveness() {
    let model = DecisionModel::from_nodes([Node::new(
        "root",
        NodePayload::Decision(vec![
            leaf_branch("b1", "B1", 10.0, 5.0),
            leaf_branch("b2", "B2", 20.0, 8.0),
        ]),
    )]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    assert_eq!(result.cost, 20.0);
    assert_eq!(result.effectiveness, 8.0);
    assert_eq!(result.strategy.as_deref(), Some("B2"));
}

#[test]
fn decision_tie_keeps_first_occurrence_of_maximum() {
    let model = DecisionModel::from_nodes([Node::new(
        "root",
        NodePayload::Decision(vec![
            leaf_branch("b1", "low", 0.0, 5.0),
            leaf_branch("b2", "first-max", 1.0, 8.0),
            leaf_branch("b3", "second-max", 2.0, 8.0),
        ]),
    )]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    assert_eq!(result.strategy.as_deref(), Some("first-max"));
    assert_eq!(result.cost, 1.0);
}

#[test]
fn decision_ignores_cost_when_selecting() {
    // The cheaper branch loses: selection is single-objective on
    // effectiveness, cost is just carried through.
    let model = DecisionModel::from_nodes([Node::new(
        "root",
        NodePayload::Decision(vec![
            leaf_branch("b1", "cheap", 1.0, 2.0),
            leaf_branch("b2", "effective", 1000.0, 3.0),
        ]),
    )]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    assert_eq!(result.strategy.as_deref(), Some("effective"));
    assert_eq!(result.cost, 1000.0);
}

#[test]
fn decision_without_branches_is_zero() {
    let model = DecisionModel::from_nodes([Node::new("root", NodePayload::Decision(vec![]))]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    assert_eq!(result.cost, 0.0);
    assert_eq!(result.effectiveness, 0.0);
    assert_eq!(result.strategy, None);
}

#[test]
fn decision_evaluates_linked_subtrees() {
    let model = DecisionModel::from_nodes([
        Node::new(
            "root",
            NodePayload::Decision(vec![
                linked_branch("b1", "treat", 1.0, "treated"),
                leaf_branch("b2", "do-nothing", 0.0, 0.3),
            ]),
        ),
        terminal("treated", 500.0, 0.9),
    ]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    assert_eq!(result.strategy.as_deref(), Some("treat"));
    assert_eq!(result.cost, 500.0);
    assert_eq!(result.effectiveness, 0.9);
}

/// Scenario B: a chance root with two 0.5 branches over terminals averages
/// their outcomes.
#[test]
fn chance_averages_children_by_probability() {
    let model = DecisionModel::from_nodes([
        Node::new(
            "root",
            NodePayload::Chance(vec![
                linked_branch("b1", "heads", 0.5, "t1"),
                linked_branch("b2", "tails", 0.5, "t2"),
            ]),
        ),
        terminal("t1", 10.0, 1.0),
        terminal("t2", 20.0, 2.0),
    ]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    assert_eq!(result.cost, 15.0);
    assert_eq!(result.effectiveness, 1.5);
    assert_eq!(result.strategy, None);
}

#[test]
fn chance_renormalizes_probabilities_that_do_not_sum_to_one() {
    // Weights 1 and 3 (sum 4) behave like 0.25 and 0.75.
    let model = DecisionModel::from_nodes([
        Node::new(
            "root",
            NodePayload::Chance(vec![
                linked_branch("b1", "rare", 1.0, "t1"),
                linked_branch("b2", "common", 3.0, "t2"),
            ]),
        ),
        terminal("t1", 0.0, 4.0),
        terminal("t2", 0.0, 8.0),
    ]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    assert_eq!(result.effectiveness, (1.0 * 4.0 + 3.0 * 8.0) / 4.0);
}

#[test]
fn chance_with_zero_total_probability_is_zero() {
    let model = DecisionModel::from_nodes([
        Node::new(
            "root",
            NodePayload::Chance(vec![linked_branch("b1", "never", 0.0, "t1")]),
        ),
        terminal("t1", 10.0, 1.0),
    ]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    assert_eq!(result.cost, 0.0);
    assert_eq!(result.effectiveness, 0.0);
}

#[test]
fn chance_skips_unlinked_branches_entirely() {
    // The unlinked branch carries a probability and its own outcome, but
    // contributes nothing at a chance node (unlike at a decision node).
    let model = DecisionModel::from_nodes([
        Node::new(
            "root",
            NodePayload::Chance(vec![
                linked_branch("b1", "linked", 0.5, "t1"),
                {
                    let mut b = Branch::new("b2", "unlinked");
                    b.probability = Value::literal(0.5);
                    b.effectiveness = Value::literal(100.0);
                    b
                },
            ]),
        ),
        terminal("t1", 10.0, 1.0),
    ]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    // Only the linked branch counts and it renormalizes to weight 1.
    assert_eq!(result.cost, 10.0);
    assert_eq!(result.effectiveness, 1.0);
}

#[test]
fn chance_probabilities_resolve_from_variables() {
    let model = DecisionModel::from_nodes([
        Node::new(
            "root",
            NodePayload::Chance(vec![
                linked_branch("b1", "respond", "p_respond", "t1"),
                linked_branch("b2", "fail", "p_fail", "t2"),
            ]),
        ),
        terminal("t1", 100.0, 1.0),
        terminal("t2", 400.0, 0.2),
    ]);
    let variables = vars([("p_respond", 0.7), ("p_fail", 0.3)]);
    let result = evaluate(&model, &NodeId::from("root"), &variables).unwrap();
    assert!((result.cost - (0.7 * 100.0 + 0.3 * 400.0)).abs() < 1e-12);
    assert!((result.effectiveness - (0.7 * 1.0 + 0.3 * 0.2)).abs() < 1e-12);
}

#[test]
fn markov_node_reached_during_rollback_is_zero() {
    let markov = MarkovModel {
        states: vec![MarkovState::new("well", 100.0, 1.0)],
        transitions: Default::default(),
        time_horizon: 10,
        cycle_length: 1.0,
        initial_distribution: Default::default(),
        half_cycle_correction: true,
    };
    let model = DecisionModel::from_nodes([
        Node::new(
            "root",
            NodePayload::Chance(vec![
                linked_branch("b1", "to-markov", 0.5, "m"),
                linked_branch("b2", "to-terminal", 0.5, "t"),
            ]),
        ),
        Node::new("m", NodePayload::Markov(markov)),
        terminal("t", 10.0, 2.0),
    ]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    // The markov child contributes (0,0); its probability still weighs in.
    assert_eq!(result.cost, 5.0);
    assert_eq!(result.effectiveness, 1.0);
}

#[test]
fn unknown_node_id_is_a_distinct_failure() {
    let model = DecisionModel::from_nodes([Node::new(
        "root",
        NodePayload::Chance(vec![linked_branch("b1", "dangling", 1.0, "missing")]),
    )]);
    let err = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap_err();
    assert_eq!(err, EvalError::NodeNotFound(NodeId::from("missing")));

    let err = evaluate(&model, &NodeId::from("nowhere"), &Variables::default()).unwrap_err();
    assert_eq!(err, EvalError::NodeNotFound(NodeId::from("nowhere")));
}

#[test]
fn cyclic_graph_fails_instead_of_recursing() {
    let model = DecisionModel::from_nodes([
        Node::new(
            "a",
            NodePayload::Chance(vec![linked_branch("ab", "to-b", 1.0, "b")]),
        ),
        Node::new(
            "b",
            NodePayload::Chance(vec![linked_branch("ba", "to-a", 1.0, "a")]),
        ),
    ]);
    let err = evaluate(&model, &NodeId::from("a"), &Variables::default()).unwrap_err();
    assert_eq!(err, EvalError::CycleDetected(NodeId::from("a")));
}

#[test]
fn self_loop_is_detected() {
    let model = DecisionModel::from_nodes([Node::new(
        "a",
        NodePayload::Chance(vec![linked_branch("aa", "self", 1.0, "a")]),
    )]);
    let err = evaluate(&model, &NodeId::from("a"), &Variables::default()).unwrap_err();
    assert_eq!(err, EvalError::CycleDetected(NodeId::from("a")));
}

#[test]
fn diamond_sharing_is_not_a_cycle() {
    // Two chance branches converging on the same terminal is fine; only
    // re-entry on the current path is a cycle.
    let model = DecisionModel::from_nodes([
        Node::new(
            "root",
            NodePayload::Chance(vec![
                linked_branch("b1", "left", 0.5, "shared"),
                linked_branch("b2", "right", 0.5, "shared"),
            ]),
        ),
        terminal("shared", 10.0, 1.0),
    ]);
    let result = evaluate(&model, &NodeId::from("root"), &Variables::default()).unwrap();
    assert_eq!(result.cost, 10.0);
    assert_eq!(result.effectiveness, 1.0);
}
