//! "Active Orchestration Plan" panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;
use crate::utils::truncate;
use crate::view::{ActivePlan, PlanPanel, WorkerRow};

/// Panel showing the active plan, its run status and its workers in
/// pipeline order.
pub struct PlanWidget<'a> {
    plan: &'a PlanPanel,
    /// Animation frame for running badges.
    frame: usize,
    theme: Theme,
}

impl<'a> PlanWidget<'a> {
    pub fn new(plan: &'a PlanPanel) -> Self {
        Self {
            plan,
            frame: 0,
            theme: Theme::default(),
        }
    }

    /// Set the spinner animation frame.
    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the panel.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(Span::styled(" Active Orchestration Plan ", self.theme.title()));

        match self.plan {
            PlanPanel::Loading => {
                let loading = Paragraph::new(Span::styled("Loading...", self.theme.muted_style()))
                    .block(block);
                frame.render_widget(loading, area);
            }
            PlanPanel::Empty(_) => {
                let message = self.plan.message().unwrap_or_default();
                let empty =
                    Paragraph::new(Span::styled(message, self.theme.muted_style())).block(block);
                frame.render_widget(empty, area);
            }
            PlanPanel::Active(plan) => {
                let inner_width = area.width.saturating_sub(2) as usize;
                let list = List::new(self.items(plan, inner_width)).block(block);
                frame.render_widget(list, area);
            }
        }
    }

    fn items(&self, plan: &ActivePlan, width: usize) -> Vec<ListItem<'static>> {
        let mut items = vec![
            ListItem::new(Line::from(Span::styled(
                truncate(&plan.plan_name, width),
                self.theme.bold(),
            ))),
            ListItem::new(Line::from(vec![
                Span::raw("Run Status: "),
                Span::styled(plan.run_status.clone(), self.theme.success_style()),
            ])),
            ListItem::new(Line::from(Span::styled(
                format!("Started: {}", plan.started_at),
                self.theme.muted_style(),
            ))),
            ListItem::new(Line::from("")),
            ListItem::new(Line::from(Span::styled("Current Workers", self.theme.bold()))),
        ];
        items.extend(plan.workers.iter().map(|w| self.worker_item(w, width)));
        items
    }

    fn worker_item(&self, worker: &WorkerRow, width: usize) -> ListItem<'static> {
        let badge = format!("{} {}", worker.badge.icon(self.frame), worker.badge.label);
        let label_width = width.saturating_sub(badge.chars().count() + 3);

        let mut lines = vec![Line::from(vec![
            Span::raw("  "),
            Span::styled(badge, self.theme.badge_style(worker.badge.kind)),
            Span::raw(" "),
            Span::raw(truncate(&worker.label, label_width)),
        ])];
        if let Some(eta) = worker.eta_line() {
            lines.push(Line::from(Span::styled(
                format!("      {}", eta),
                self.theme.muted_style(),
            )));
        }
        ListItem::new(Text::from(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{demo_view, draw_lines};
    use crate::view::{DashboardView, NO_ACTIVE_PLAN};
    use opsboard_core::{CycleOutcome, Snapshot, SourceError, Stats};

    fn position(lines: &[String], needle: &str) -> usize {
        lines
            .iter()
            .position(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("'{}' not rendered in {:#?}", needle, lines))
    }

    #[test]
    fn test_workers_render_in_pipeline_order() {
        let view = demo_view();
        let lines = draw_lines(60, 20, |frame, area| {
            PlanWidget::new(&view.plan).render(frame, area)
        });

        let ingestion = position(&lines, "Data Ingestion Worker");
        let validation = position(&lines, "Validation Worker");
        let transform = position(&lines, "Transform Worker");
        let deployment = position(&lines, "Deployment Worker");
        assert!(ingestion < validation && validation < transform && transform < deployment);

        assert!(lines[ingestion].contains("✓ Completed"));
        assert!(lines[validation].contains("Running"));
        assert!(lines[transform].contains("◷ Pending"));
        assert!(lines[position(&lines, "Run Status:")].contains("running"));
    }

    #[test]
    fn test_eta_lines() {
        let view = demo_view();
        let lines = draw_lines(60, 20, |frame, area| {
            PlanWidget::new(&view.plan).render(frame, area)
        });

        let ingestion = position(&lines, "Data Ingestion Worker");
        // No ETA line between a worker without ETA and the next worker.
        assert!(lines[ingestion + 1].contains("Validation Worker"));
        assert!(lines[ingestion + 2].contains("ETA: 2m 15s"));
        assert_eq!(lines.iter().filter(|l| l.contains("ETA:")).count(), 3);
    }

    #[test]
    fn test_spinner_frame_changes_running_icon_only() {
        let view = demo_view();
        let at = |frame_no: usize| {
            draw_lines(60, 20, |frame, area| {
                PlanWidget::new(&view.plan)
                    .spinner_frame(frame_no)
                    .render(frame, area)
            })
        };
        let first = at(0);
        let second = at(1);

        let validation = position(&first, "Validation Worker");
        assert_ne!(first[validation], second[validation]);
        let others = first
            .iter()
            .zip(second.iter())
            .filter(|(a, _)| !a.contains("Validation Worker"));
        for (a, b) in others {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_empty_panel_message() {
        let view = DashboardView::project(&Snapshot::settled(
            1,
            CycleOutcome::RunUnavailable {
                stats: Stats::new(1, 1, 1, 1).with_active_run("Plan", "run_x"),
                error: SourceError::NotFound("run_x".into()),
            },
        ));
        let lines = draw_lines(60, 5, |frame, area| {
            PlanWidget::new(&view.plan).render(frame, area)
        });
        assert!(lines[1].contains(NO_ACTIVE_PLAN));
    }
}
