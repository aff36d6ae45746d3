//! Prometheus metrics collection and formatting.
//!
//! This module provides metrics in Prometheus text exposition format.

use std::fmt::Write;
use std::sync::Arc;

use opsboard_core::WorkerStatus;

use crate::state::AppState;

/// Collect all metrics from AppState and format as Prometheus text.
pub async fn collect_metrics(state: &Arc<AppState>) -> String {
    let mut output = String::new();

    collect_catalog_metrics(state, &mut output).await;
    collect_worker_metrics(state, &mut output).await;

    output
}

/// Catalog counters from the current stats.
async fn collect_catalog_metrics(state: &Arc<AppState>, output: &mut String) {
    let stats = state.stats().await;

    writeln!(
        output,
        "# HELP opsboard_catalog_total Number of catalog entries by kind"
    )
    .ok();
    writeln!(output, "# TYPE opsboard_catalog_total gauge").ok();
    for (kind, count) in [
        ("plugins", stats.plugins),
        ("agents", stats.agents),
        ("skills", stats.skills),
        ("orchestrators", stats.orchestrators),
    ] {
        writeln!(output, "opsboard_catalog_total{{kind=\"{kind}\"}} {count}").ok();
    }
}

/// Workers of the active run by status.
async fn collect_worker_metrics(state: &Arc<AppState>, output: &mut String) {
    let run = state.active_run().await;

    writeln!(output).ok();
    writeln!(
        output,
        "# HELP opsboard_active_run_workers Workers of the active run by status"
    )
    .ok();
    writeln!(output, "# TYPE opsboard_active_run_workers gauge").ok();
    for status in WorkerStatus::KNOWN {
        let count = run.as_ref().map_or(0, |r| r.count_with_status(&status));
        writeln!(output, "opsboard_active_run_workers{{status=\"{status}\"}} {count}").ok();
    }
    let unknown = run.as_ref().map_or(0, |r| r.unknown_status_workers().count());
    writeln!(output, "opsboard_active_run_workers{{status=\"unknown\"}} {unknown}").ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsboard_core::Stats;

    #[tokio::test]
    async fn test_collect_metrics_demo_state() {
        let state = AppState::demo();
        let output = collect_metrics(&state).await;

        assert!(output.contains("opsboard_catalog_total{kind=\"skills\"} 127"));
        assert!(output.contains("opsboard_active_run_workers{status=\"pending\"} 2"));
        assert!(output.contains("opsboard_active_run_workers{status=\"running\"} 1"));
        assert!(output.contains("opsboard_active_run_workers{status=\"completed\"} 1"));
    }

    #[tokio::test]
    async fn test_collect_metrics_without_active_run() {
        let state = AppState::new(Stats::new(0, 0, 0, 0), vec![]);
        let output = collect_metrics(&state).await;

        assert!(output.contains("opsboard_catalog_total{kind=\"plugins\"} 0"));
        assert!(output.contains("opsboard_active_run_workers{status=\"running\"} 0"));
        assert!(output.contains("opsboard_active_run_workers{status=\"unknown\"} 0"));
    }

    #[tokio::test]
    async fn test_collect_metrics_counts_unknown_statuses() {
        let run = opsboard_core::demo::run(chrono::Utc::now()).with_worker(
            opsboard_core::Worker::new("worker_5", "Audit Worker", WorkerStatus::parse("paused")),
        );
        let state = AppState::new(opsboard_core::demo::stats(), vec![run]);
        let output = collect_metrics(&state).await;

        assert!(output.contains("opsboard_active_run_workers{status=\"unknown\"} 1"));
        assert!(output.contains("opsboard_active_run_workers{status=\"failed\"} 0"));
    }
}
