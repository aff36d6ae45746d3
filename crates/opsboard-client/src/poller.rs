//! Status poller: one fetch cycle per `refresh()`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use opsboard_core::{CycleOutcome, RunSource, Snapshot, StatsSource};

use crate::http::HttpClient;
use crate::store::SnapshotStore;

/// Fetches stats, then the active run, and publishes the result.
///
/// Each `refresh()` is one cycle with its own sequence number. The cycle
/// publishes `Loading` when it starts and its outcome once when it ends;
/// the store discards either if a newer cycle already published.
pub struct Poller<S, R> {
    stats: S,
    runs: R,
    store: Arc<SnapshotStore>,
    last_cycle: AtomicU64,
}

impl Poller<HttpClient, HttpClient> {
    /// Poller reading both resources from one HTTP endpoint.
    pub fn over_http(client: HttpClient) -> Self {
        Self::new(client.clone(), client)
    }
}

impl<S: StatsSource, R: RunSource> Poller<S, R> {
    /// Create a poller with its own snapshot store.
    pub fn new(stats: S, runs: R) -> Self {
        Self::with_store(stats, runs, Arc::new(SnapshotStore::new()))
    }

    /// Create a poller publishing into an existing store.
    pub fn with_store(stats: S, runs: R, store: Arc<SnapshotStore>) -> Self {
        Self {
            stats,
            runs,
            store,
            last_cycle: AtomicU64::new(0),
        }
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// Subscribe to published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.store.subscribe()
    }

    /// True while the displayed snapshot belongs to a cycle in flight.
    pub fn is_loading(&self) -> bool {
        self.store.current().is_loading()
    }

    /// Run one cycle and return its outcome.
    ///
    /// The outcome is returned even when a newer cycle has already been
    /// published and this one was discarded by the store.
    pub async fn refresh(&self) -> CycleOutcome {
        let cycle = self.last_cycle.fetch_add(1, Ordering::SeqCst) + 1;
        self.store.publish(Snapshot::loading(cycle));
        debug!(cycle, "Refresh cycle started");

        let outcome = self.fetch().await;

        if self.store.publish(Snapshot::settled(cycle, outcome.clone())) {
            debug!(cycle, phase = ?outcome.phase(), "Refresh cycle settled");
        } else {
            debug!(cycle, "Refresh cycle superseded, result dropped");
        }
        outcome
    }

    async fn fetch(&self) -> CycleOutcome {
        let stats = match self.stats.get_stats().await {
            Ok(stats) => stats,
            Err(error) => {
                warn!(kind = error.kind(), error = %error, "Failed to fetch stats");
                return CycleOutcome::Failed { error };
            }
        };

        let Some(run_id) = stats.active_run_id.clone() else {
            debug!("No active run");
            return CycleOutcome::NoActiveRun { stats };
        };

        match self.runs.get_run(&run_id).await {
            Ok(run) => {
                for worker in run.unknown_status_workers() {
                    warn!(
                        run_id = %run.id,
                        worker_id = %worker.id,
                        status = %worker.status,
                        "Worker reported an unrecognized status"
                    );
                }
                CycleOutcome::Ready { stats, run }
            }
            Err(error) => {
                warn!(
                    run_id = %run_id,
                    kind = error.kind(),
                    error = %error,
                    "Failed to fetch active run"
                );
                CycleOutcome::RunUnavailable { stats, error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::{HashMap, VecDeque};
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use tokio::sync::Notify;

    use opsboard_core::{demo, NoRunReason, Phase, Run, RunId, SourceError, Stats, WorkerStatus};

    struct FakeStats {
        result: Result<Stats, SourceError>,
        calls: AtomicUsize,
    }

    impl FakeStats {
        fn ok(stats: Stats) -> Arc<Self> {
            Arc::new(Self {
                result: Ok(stats),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(error: SourceError) -> Arc<Self> {
            Arc::new(Self {
                result: Err(error),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl StatsSource for FakeStats {
        async fn get_stats(&self) -> Result<Stats, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct FakeRuns {
        runs: HashMap<RunId, Run>,
        requested: Mutex<Vec<RunId>>,
    }

    impl FakeRuns {
        fn with(runs: Vec<Run>) -> Arc<Self> {
            Arc::new(Self {
                runs: runs.into_iter().map(|r| (r.id.clone(), r)).collect(),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn requested(&self) -> Vec<RunId> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RunSource for FakeRuns {
        async fn get_run(&self, run_id: &RunId) -> Result<Run, SourceError> {
            self.requested.lock().unwrap().push(run_id.clone());
            self.runs
                .get(run_id)
                .cloned()
                .ok_or_else(|| SourceError::NotFound(run_id.to_string()))
        }
    }

    /// Stats source whose first call blocks until released.
    struct GatedStats {
        responses: Mutex<VecDeque<Stats>>,
        calls: AtomicUsize,
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl StatsSource for GatedStats {
        async fn get_stats(&self) -> Result<Stats, SourceError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let stats = self.responses.lock().unwrap().pop_front();
            if call == 0 {
                self.entered.notify_one();
                self.release.notified().await;
            }
            stats.ok_or_else(|| SourceError::Network("no response queued".into()))
        }
    }

    fn demo_stats() -> Stats {
        demo::stats()
    }

    fn demo_run() -> Run {
        demo::run(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn test_full_cycle_fetches_stats_then_active_run() {
        let stats = FakeStats::ok(demo_stats());
        let runs = FakeRuns::with(vec![demo_run()]);
        let poller = Poller::new(Arc::clone(&stats), Arc::clone(&runs));

        let outcome = poller.refresh().await;

        assert_eq!(outcome.phase(), Phase::ReadyWithRun);
        let run = outcome.run().unwrap();
        assert_eq!(Some(&run.id), outcome.stats().unwrap().active_run_id.as_ref());
        let statuses: Vec<&WorkerStatus> = run.workers.iter().map(|w| &w.status).collect();
        assert_eq!(
            statuses,
            vec![
                &WorkerStatus::Completed,
                &WorkerStatus::Running,
                &WorkerStatus::Pending,
                &WorkerStatus::Pending
            ]
        );
        assert_eq!(stats.calls.load(Ordering::SeqCst), 1);
        assert_eq!(runs.requested(), vec![RunId::new("run_abc123")]);

        let current = poller.store().current();
        assert_eq!(current.cycle, 1);
        assert!(!poller.is_loading());
        assert_eq!(current.outcome(), Some(&outcome));
    }

    #[tokio::test]
    async fn test_no_active_run_never_requests_run() {
        let stats = FakeStats::ok(Stats::new(1, 2, 3, 4));
        let runs = FakeRuns::with(vec![demo_run()]);
        let poller = Poller::new(Arc::clone(&stats), Arc::clone(&runs));

        let outcome = poller.refresh().await;

        assert_eq!(
            outcome.phase(),
            Phase::ReadyWithoutRun(NoRunReason::NoActiveRun)
        );
        assert!(runs.requested().is_empty());
    }

    #[tokio::test]
    async fn test_stats_failure_fails_whole_cycle() {
        let stats = FakeStats::failing(SourceError::Network("connection refused".into()));
        let runs = FakeRuns::with(vec![demo_run()]);
        let poller = Poller::new(Arc::clone(&stats), Arc::clone(&runs));

        let outcome = poller.refresh().await;

        assert_eq!(outcome.phase(), Phase::Error);
        assert!(outcome.stats().is_none());
        assert!(outcome.run().is_none());
        assert_eq!(stats.calls.load(Ordering::SeqCst), 1);
        assert!(runs.requested().is_empty());
        assert!(!poller.is_loading());
    }

    #[tokio::test]
    async fn test_missing_run_downgrades_to_no_active_plan() {
        let stats = FakeStats::ok(Stats::new(5, 6, 7, 8).with_active_run("Plan", "run_x"));
        let runs = FakeRuns::with(vec![]);
        let poller = Poller::new(Arc::clone(&stats), Arc::clone(&runs));

        let outcome = poller.refresh().await;

        assert_eq!(
            outcome.phase(),
            Phase::ReadyWithoutRun(NoRunReason::RunUnavailable)
        );
        assert_eq!(outcome.stats().map(|s| s.plugins), Some(5));
        assert_eq!(outcome.error(), Some(&SourceError::NotFound("run_x".into())));
        assert!(!poller.is_loading());
    }

    #[tokio::test]
    async fn test_repeated_refresh_is_idempotent() {
        let poller = Poller::new(FakeStats::ok(demo_stats()), FakeRuns::with(vec![demo_run()]));

        let first = poller.refresh().await;
        let second = poller.refresh().await;

        assert_eq!(first, second);
        assert_eq!(poller.store().current().cycle, 2);
    }

    #[tokio::test]
    async fn test_loading_is_visible_while_in_flight() {
        let stats = Arc::new(GatedStats {
            responses: Mutex::new(VecDeque::from([Stats::new(1, 1, 1, 1)])),
            calls: AtomicUsize::new(0),
            entered: Notify::new(),
            release: Notify::new(),
        });
        let poller = Arc::new(Poller::new(Arc::clone(&stats), FakeRuns::with(vec![])));

        let task = tokio::spawn({
            let poller = Arc::clone(&poller);
            async move { poller.refresh().await }
        });

        stats.entered.notified().await;
        assert!(poller.is_loading());
        assert_eq!(poller.store().current().cycle, 1);

        stats.release.notify_one();
        task.await.unwrap();
        assert!(!poller.is_loading());
    }

    #[tokio::test]
    async fn test_late_older_cycle_does_not_overwrite_newer() {
        let stats = Arc::new(GatedStats {
            responses: Mutex::new(VecDeque::from([
                Stats::new(1, 0, 0, 0),
                Stats::new(2, 0, 0, 0),
            ])),
            calls: AtomicUsize::new(0),
            entered: Notify::new(),
            release: Notify::new(),
        });
        let poller = Arc::new(Poller::new(Arc::clone(&stats), FakeRuns::with(vec![])));

        // Cycle 1 blocks inside the stats call.
        let older = tokio::spawn({
            let poller = Arc::clone(&poller);
            async move { poller.refresh().await }
        });
        stats.entered.notified().await;

        // Cycle 2 completes first.
        let newer = poller.refresh().await;
        assert_eq!(newer.stats().map(|s| s.plugins), Some(2));

        stats.release.notify_one();
        let late = older.await.unwrap();
        assert_eq!(late.stats().map(|s| s.plugins), Some(1));

        let current = poller.store().current();
        assert_eq!(current.cycle, 2);
        assert_eq!(current.stats().map(|s| s.plugins), Some(2));
    }
}
