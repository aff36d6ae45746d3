//! Header widget for the dashboard.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use opsboard_core::Phase;

use crate::theme::Theme;

/// Status indicator for the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub label: String,
    pub color: Color,
}

impl StatusIndicator {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::new(label, Color::Green)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::new(label, Color::Yellow)
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self::new(label, Color::Red)
    }

    /// Indicator for a view phase.
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Loading => Self::warning("Refreshing"),
            Phase::ReadyWithRun => Self::success("Live"),
            Phase::ReadyWithoutRun(_) => Self::new("Idle", Color::Gray),
            Phase::Error => Self::error("Error"),
        }
    }
}

/// Header widget with title and status.
#[derive(Debug, Clone)]
pub struct Header<'a> {
    /// Application title.
    title: &'a str,
    /// Status indicator.
    status: Option<StatusIndicator>,
    /// Endpoint being polled, shown on the right.
    endpoint: Option<&'a str>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> Header<'a> {
    /// Create a new header with a title.
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            status: None,
            endpoint: None,
            theme: Theme::default(),
        }
    }

    /// Set the status indicator.
    pub fn status(mut self, status: StatusIndicator) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the endpoint label.
    pub fn endpoint(mut self, endpoint: &'a str) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the header.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let mut title_spans = vec![Span::styled(format!(" {} ", self.title), self.theme.title())];
        if let Some(status) = &self.status {
            title_spans.push(Span::styled(
                format!("[{}]", status.label),
                Style::default().fg(status.color),
            ));
            title_spans.push(Span::raw(" "));
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(title_spans);
        if let Some(endpoint) = self.endpoint {
            block = block.title_bottom(Span::styled(
                format!(" {} ", endpoint),
                self.theme.muted_style(),
            ));
        }

        frame.render_widget(block, area);
    }
}
