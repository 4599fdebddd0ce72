mod graph;
mod ids;
mod markov;
mod nodes;
mod results;
mod value;

pub use graph::DecisionModel;
pub use ids::{BranchId, NodeId};
pub use markov::{MarkovModel, MarkovState, TransitionEntries};
pub use nodes::{Branch, Node, NodePayload};
pub use results::{EvResult, SensitivityParam, TornadoBar, TornadoResult};
pub use value::{Value, Variables};
