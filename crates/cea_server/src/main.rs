//! HTTP front-end for the decision analysis engine
//!
//! Thin plumbing around `cea_core`: request schema validation, editor
//! node/edge wiring, root discovery, the default ±20% sweep policy, and
//! error-to-status translation. The engine itself stays pure.

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod api_conversion;
mod api_types;
mod error;
mod handlers;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = routes::analysis_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
