//! Health-economic decision analysis engine
//!
//! This crate evaluates decision models: rooted graphs whose nodes are
//! decisions, chance events, terminal outcomes, or Markov cohort processes,
//! and whose output is an expected (cost, effectiveness) pair. It supports:
//! - Recursive expected-value rollback over decision/chance/terminal trees
//! - Discrete-time Markov cohort simulation over a fixed time horizon
//! - One-way ("tornado") sensitivity analysis built on the rollback evaluator
//!
//! Every numeric field in a model may be either a literal or a reference to
//! a named variable, resolved against a per-evaluation variable mapping.
//! This is the mechanism sensitivity analysis exploits: perturbing one
//! variable propagates through every field that references it.
//!
//! The engine is pure and synchronous. It consumes an already-wired
//! [`model::DecisionModel`] (branch targets resolved, root known) and
//! returns plain result values; request handling, editor edge-list wiring,
//! and result marshalling belong to the calling layer.
//!
//! ```ignore
//! use cea_core::{evaluate, model::{DecisionModel, Variables}};
//!
//! let model = DecisionModel::from_nodes(nodes);
//! let result = evaluate(&model, &root_id, &variables)?;
//! println!("{} at cost {}", result.effectiveness, result.cost);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod evaluate;
pub mod markov;
pub mod matrix;
pub mod sensitivity;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{EvalError, Result};
pub use evaluate::evaluate;
pub use markov::{HalfCyclePolicy, simulate_markov, simulate_markov_with};
pub use sensitivity::one_way_sensitivity;
