use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;

pub fn analysis_routes() -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/analyze/rollback", post(handlers::run_rollback_analysis))
        .route(
            "/analyze/sensitivity-oneway",
            post(handlers::run_sensitivity_analysis),
        )
}
