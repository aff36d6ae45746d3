//! Theme and style definitions.

use ratatui::style::{Color, Modifier, Style};

use crate::view::BadgeKind;

/// Theme configuration for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary accent color (titles, active elements)
    pub accent: Color,
    /// Success color (completed stages, healthy connection)
    pub success: Color,
    /// In-progress color (running stages)
    pub running: Color,
    /// Neutral color (pending stages, unknown values)
    pub neutral: Color,
    /// Error color (failed stages, failed cycles)
    pub error: Color,
    /// Muted color (ETA lines, secondary info)
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            success: Color::Green,
            running: Color::Blue,
            neutral: Color::Gray,
            error: Color::Red,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Style for borders.
    pub fn border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for panel titles.
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for muted/secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for bold text.
    pub fn bold(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Badge color for a worker status.
    pub fn badge_color(&self, kind: BadgeKind) -> Color {
        match kind {
            BadgeKind::Completed => self.success,
            BadgeKind::Running => self.running,
            BadgeKind::Pending | BadgeKind::Unknown => self.neutral,
            BadgeKind::Failed => self.error,
        }
    }

    /// Style for a worker status badge.
    pub fn badge_style(&self, kind: BadgeKind) -> Style {
        let style = Style::default().fg(self.badge_color(kind));
        if kind == BadgeKind::Running {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
