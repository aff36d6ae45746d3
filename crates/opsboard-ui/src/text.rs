//! Plain-text rendering of a dashboard view.

use std::fmt::Write;

use crate::view::{DashboardView, PlanPanel};

/// Render a view as plain text, one element per line.
///
/// Running badges use their first animation frame so the output is stable
/// across calls.
pub fn render_text(view: &DashboardView) -> String {
    let mut out = String::new();

    let counters: Vec<String> = view
        .stat_cards
        .iter()
        .map(|card| format!("{}: {}", card.title, card.value.text()))
        .collect();
    writeln!(out, "{}", counters.join("  |  ")).ok();
    writeln!(out).ok();

    writeln!(out, "Active Orchestration Plan").ok();
    match &view.plan {
        PlanPanel::Loading => {
            writeln!(out, "  Loading...").ok();
        }
        PlanPanel::Empty(_) => {
            writeln!(out, "  {}", view.plan.message().unwrap_or_default()).ok();
        }
        PlanPanel::Active(plan) => {
            writeln!(out, "  {}", plan.plan_name).ok();
            writeln!(out, "  Run Status: {}", plan.run_status).ok();
            writeln!(out, "  Started: {}", plan.started_at).ok();
            writeln!(out).ok();
            writeln!(out, "  Current Workers").ok();
            for worker in &plan.workers {
                writeln!(
                    out,
                    "    [{} {}] {}",
                    worker.badge.icon(0),
                    worker.badge.label,
                    worker.label
                )
                .ok();
                if let Some(eta) = worker.eta_line() {
                    writeln!(out, "        {}", eta).ok();
                }
            }
        }
    }

    if let Some(notice) = &view.notice {
        writeln!(out).ok();
        writeln!(out, "! {}", notice).ok();
    }

    out
}
