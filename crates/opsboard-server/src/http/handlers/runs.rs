//! Run detail handler.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, error};

use opsboard_core::{Run, RunId};

use crate::http::ApiError;
use crate::state::AppState;

/// `GET /runs/:run_id`.
///
/// Workers are returned in stored (pipeline) order. A stored run whose
/// worker ids are not unique is refused rather than served.
pub async fn get_run(
    State(state): State<Arc<AppState>>,
    Path(run_id): Path<String>,
) -> Result<Json<Run>, ApiError> {
    let run_id = RunId::new(run_id);

    let run = state.run(&run_id).await.ok_or_else(|| {
        debug!(run_id = %run_id, "Run not found");
        ApiError::NotFound(format!("run '{}' not found", run_id))
    })?;

    if let Err(e) = run.validate() {
        error!(run_id = %run_id, error = %e, "Refusing to serve invalid run");
        return Err(ApiError::Internal(e.to_string()));
    }

    debug!(run_id = %run_id, workers = run.workers.len(), "Serving run");
    Ok(Json(run))
}
