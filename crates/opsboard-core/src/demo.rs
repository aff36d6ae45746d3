//! The production deployment pipeline served when no fixture is given.

use chrono::{DateTime, Utc};

use crate::{Run, Stats, Worker, WorkerStatus};

pub const DEMO_PLAN_NAME: &str = "Production Deployment Pipeline";
pub const DEMO_RUN_ID: &str = "run_abc123";

/// Catalog counters with the demo run active.
pub fn stats() -> Stats {
    Stats::new(42, 18, 127, 9).with_active_run(DEMO_PLAN_NAME, DEMO_RUN_ID)
}

/// The demo run: ingestion done, validation running, two stages queued.
pub fn run(started_at: DateTime<Utc>) -> Run {
    Run::new(DEMO_RUN_ID, "running", started_at)
        .with_worker(Worker::new(
            "worker_1",
            "Data Ingestion Worker",
            WorkerStatus::Completed,
        ))
        .with_worker(
            Worker::new("worker_2", "Validation Worker", WorkerStatus::Running)
                .with_eta("2m 15s"),
        )
        .with_worker(
            Worker::new("worker_3", "Transform Worker", WorkerStatus::Pending).with_eta("5m 30s"),
        )
        .with_worker(
            Worker::new("worker_4", "Deployment Worker", WorkerStatus::Pending)
                .with_eta("8m 45s"),
        )
}
