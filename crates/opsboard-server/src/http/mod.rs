//! HTTP server.
//!
//! Provides endpoints for:
//! - Global counters and active run (`/stats`)
//! - Run detail with ordered workers (`/runs/:run_id`)
//! - Health check (`/health`)
//! - Prometheus metrics (`/metrics`)

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod error;
mod handlers;

pub use error::{ApiError, ErrorResponse};

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Dashboards may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/stats", get(handlers::get_stats))
        .route("/runs/:run_id", get(handlers::get_run))
        // Observability routes
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
