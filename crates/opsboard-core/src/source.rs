//! Contracts for the two read-only data sources the poller consumes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Run, RunId, SourceError, Stats};

/// Answers "what is the current global state?".
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetch a fresh stats snapshot. Succeeds or fails as a whole.
    async fn get_stats(&self) -> Result<Stats, SourceError>;
}

/// Answers "what is the status of run R?".
#[async_trait]
pub trait RunSource: Send + Sync {
    /// Fetch the run with its workers in pipeline order.
    ///
    /// Returns [`SourceError::NotFound`] when the id is unknown.
    async fn get_run(&self, run_id: &RunId) -> Result<Run, SourceError>;
}

#[async_trait]
impl<T: StatsSource + ?Sized> StatsSource for Arc<T> {
    async fn get_stats(&self) -> Result<Stats, SourceError> {
        (**self).get_stats().await
    }
}

#[async_trait]
impl<T: RunSource + ?Sized> RunSource for Arc<T> {
    async fn get_run(&self, run_id: &RunId) -> Result<Run, SourceError> {
        (**self).get_run(run_id).await
    }
}
