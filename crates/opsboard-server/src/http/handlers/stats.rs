//! Global stats handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use opsboard_core::Stats;

use crate::state::AppState;

/// `GET /stats`.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<Stats> {
    let stats = state.stats().await;
    debug!(active_run_id = ?stats.active_run_id, "Serving stats");
    Json(stats)
}
