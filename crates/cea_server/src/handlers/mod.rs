mod analysis_handlers;

pub use analysis_handlers::{health, run_rollback_analysis, run_sensitivity_analysis};
