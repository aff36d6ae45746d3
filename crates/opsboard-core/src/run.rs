//! Runs and the ordered workers (pipeline stages) they carry.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoreError, RunId, WorkerId, WorkerStatus};

/// One pipeline stage of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique within the owning run.
    pub id: WorkerId,

    /// Display name.
    pub label: String,

    pub status: WorkerStatus,

    /// Estimated time remaining, as a display string (e.g. "2m 15s").
    #[serde(default)]
    pub eta: Option<String>,
}

impl Worker {
    /// Create a new worker without an ETA.
    pub fn new(id: impl Into<WorkerId>, label: impl Into<String>, status: WorkerStatus) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            status,
            eta: None,
        }
    }

    /// Builder method to set the ETA.
    pub fn with_eta(mut self, eta: impl Into<String>) -> Self {
        self.eta = Some(eta.into());
        self
    }
}

/// One execution of an orchestration plan.
///
/// A run is always fetched and replaced as a whole; `workers` keeps the
/// order the run source returned, which is pipeline order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub id: RunId,

    /// Free-form lifecycle status (e.g. "running").
    pub status: String,

    pub started_at: DateTime<Utc>,

    #[serde(default)]
    pub workers: Vec<Worker>,
}

impl Run {
    /// Create a run with no workers.
    pub fn new(
        id: impl Into<RunId>,
        status: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            started_at,
            workers: Vec::new(),
        }
    }

    /// Builder method to append a worker at the end of the pipeline.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.workers.push(worker);
        self
    }

    /// Check that worker ids are unique within the run.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(self.workers.len());
        for worker in &self.workers {
            if !seen.insert(&worker.id) {
                return Err(CoreError::DuplicateWorkerId {
                    run: self.id.to_string(),
                    worker: worker.id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Workers whose status is outside the contract.
    pub fn unknown_status_workers(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(|w| !w.status.is_known())
    }

    /// Number of workers in the given status.
    pub fn count_with_status(&self, status: &WorkerStatus) -> usize {
        self.workers.iter().filter(|w| &w.status == status).count()
    }
}
