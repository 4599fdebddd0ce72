mod analysis;

pub use analysis::analysis_routes;
