//! Row of counter cards.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;
use crate::view::{StatCard, StatValue};

/// Four equally wide cards, one per counter.
pub struct StatCards<'a> {
    cards: &'a [StatCard],
    theme: Theme,
}

impl<'a> StatCards<'a> {
    pub fn new(cards: &'a [StatCard]) -> Self {
        Self {
            cards,
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the cards side by side.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        if self.cards.is_empty() {
            return;
        }

        let areas = Layout::horizontal(
            self.cards
                .iter()
                .map(|_| Constraint::Ratio(1, self.cards.len() as u32)),
        )
        .split(area);

        for (card, card_area) in self.cards.iter().zip(areas.iter()) {
            let value_style = match card.value {
                StatValue::Count(_) => self.theme.bold(),
                StatValue::Loading | StatValue::Missing => self.theme.muted_style(),
            };

            let widget = Paragraph::new(Span::styled(card.value.text(), value_style))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.theme.muted_style())
                        .title(Span::styled(format!(" {} ", card.title), self.theme.title())),
                );
            frame.render_widget(widget, *card_area);
        }
    }
}
