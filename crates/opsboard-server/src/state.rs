//! Shared application state.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use opsboard_core::{Run, RunId, Stats};

use crate::fixture::Fixture;

/// Shared application state.
pub struct AppState {
    /// Current global counters and active run.
    pub stats: RwLock<Stats>,

    /// Runs indexed by RunId.
    pub runs: RwLock<HashMap<RunId, Run>>,
}

impl AppState {
    /// Create a new AppState wrapped in Arc.
    pub fn new(stats: Stats, runs: Vec<Run>) -> Arc<Self> {
        Arc::new(Self {
            stats: RwLock::new(stats),
            runs: RwLock::new(runs.into_iter().map(|r| (r.id.clone(), r)).collect()),
        })
    }

    /// State serving a fixture.
    pub fn from_fixture(fixture: Fixture) -> Arc<Self> {
        Self::new(fixture.stats, fixture.runs)
    }

    /// State serving the demo pipeline, started now.
    pub fn demo() -> Arc<Self> {
        Self::from_fixture(Fixture::demo(Utc::now()))
    }

    /// Copy of the current stats.
    pub async fn stats(&self) -> Stats {
        self.stats.read().await.clone()
    }

    /// Copy of a run, if known.
    pub async fn run(&self, run_id: &RunId) -> Option<Run> {
        self.runs.read().await.get(run_id).cloned()
    }

    /// The run named by the current stats, if it exists.
    pub async fn active_run(&self) -> Option<Run> {
        let run_id = self.stats.read().await.active_run_id.clone()?;
        self.run(&run_id).await
    }

    /// Get the number of known runs.
    pub async fn run_count(&self) -> usize {
        self.runs.read().await.len()
    }
}
