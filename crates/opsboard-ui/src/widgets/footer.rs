//! Footer widget displaying key help and the status line.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

/// Footer widget displaying help text and an optional notice.
#[derive(Debug, Clone)]
pub struct Footer<'a> {
    /// Help text.
    help: &'a str,
    /// Notice shown before the help, in the error color.
    notice: Option<&'a str>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> Footer<'a> {
    /// Create a new footer with help text.
    pub fn new(help: &'a str) -> Self {
        Self {
            help,
            notice: None,
            theme: Theme::default(),
        }
    }

    /// Set the notice.
    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the footer.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if let Some(notice) = self.notice {
            spans.push(Span::styled(notice, self.theme.error_style()));
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(self.help, self.theme.muted_style()));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
