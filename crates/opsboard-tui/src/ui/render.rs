//! Main render function for the TUI.

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use opsboard_ui::{Footer, Header, PlanWidget, StatCards, StatusIndicator, Theme};

use crate::state::UiState;

const HELP: &str = " q: quit | r: refresh ";

/// Render the entire UI.
pub fn render(frame: &mut Frame, state: &UiState) {
    let theme = Theme::default();
    let view = &state.view;

    let [header_area, cards_area, plan_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    Header::new("opsboard")
        .status(StatusIndicator::for_phase(view.phase))
        .endpoint(&state.endpoint)
        .theme(theme)
        .render(frame, header_area);

    StatCards::new(&view.stat_cards)
        .theme(theme)
        .render(frame, cards_area);

    PlanWidget::new(&view.plan)
        .spinner_frame(state.spinner_frame)
        .theme(theme)
        .render(frame, plan_area);

    Footer::new(HELP)
        .notice(view.notice.as_deref())
        .theme(theme)
        .render(frame, footer_area);
}
