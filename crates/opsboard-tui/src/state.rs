//! UI state for rendering.

use opsboard_core::Snapshot;
use opsboard_ui::view::SPINNER_FRAMES;
use opsboard_ui::DashboardView;

/// Data for rendering (no async, no locks).
pub struct UiState {
    /// Projection of the latest snapshot.
    pub view: DashboardView,

    /// Cycle of the snapshot `view` was projected from.
    pub cycle: u64,

    /// Current frame of the running-worker spinner.
    pub spinner_frame: usize,

    /// Base URL being polled.
    pub endpoint: String,
}

impl UiState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            view: DashboardView::project(&Snapshot::initial()),
            cycle: 0,
            spinner_frame: 0,
            endpoint: endpoint.into(),
        }
    }

    /// Replace the view with the projection of `snapshot`.
    pub fn apply(&mut self, snapshot: &Snapshot) {
        self.view = DashboardView::project(snapshot);
        self.cycle = snapshot.cycle;
    }

    /// Advance the spinner by one frame.
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsboard_core::{CycleOutcome, Phase, Stats};
    use opsboard_ui::StatValue;

    #[test]
    fn test_starts_loading() {
        let state = UiState::new("http://127.0.0.1:3000");
        assert!(state.view.is_loading());
        assert_eq!(state.cycle, 0);
    }

    #[test]
    fn test_apply_replaces_view() {
        let mut state = UiState::new("http://127.0.0.1:3000");
        let snapshot = Snapshot::settled(
            3,
            CycleOutcome::NoActiveRun {
                stats: Stats::new(42, 18, 127, 9),
            },
        );

        state.apply(&snapshot);

        assert_eq!(state.cycle, 3);
        assert!(matches!(state.view.phase, Phase::ReadyWithoutRun(_)));
        assert_eq!(state.view.stat_cards[0].value, StatValue::Count(42));
    }

    #[test]
    fn test_spinner_wraps() {
        let mut state = UiState::new("http://127.0.0.1:3000");
        for _ in 0..SPINNER_FRAMES.len() {
            state.tick();
        }
        assert_eq!(state.spinner_frame, 0);
    }
}
