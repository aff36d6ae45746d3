//! Application state and main event loop.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tokio::sync::{mpsc, watch};
use tracing::debug;

use opsboard_core::Snapshot;

use crate::event::BackendCommand;
use crate::state::UiState;
use crate::ui;

/// Main application with UI state and channel handles.
pub struct App {
    /// Current UI state for rendering.
    state: UiState,

    /// Receiver for snapshots published by the poller.
    snapshot_rx: watch::Receiver<Arc<Snapshot>>,

    /// Sender for commands to the backend.
    cmd_tx: mpsc::Sender<BackendCommand>,
}

impl App {
    /// Create a new application instance with channel handles.
    pub fn new(
        snapshot_rx: watch::Receiver<Arc<Snapshot>>,
        cmd_tx: mpsc::Sender<BackendCommand>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            state: UiState::new(endpoint),
            snapshot_rx,
            cmd_tx,
        }
    }

    /// Run the main event loop.
    ///
    /// This runs on the main thread and handles:
    /// - Drawing the UI
    /// - Processing keyboard input
    /// - Picking up the latest snapshot from the poller
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            // Poll terminal events (non-blocking with short timeout)
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key.code) {
                        break;
                    }
                }
            }

            self.sync_snapshot();
            self.state.tick();
        }

        let _ = self.cmd_tx.blocking_send(BackendCommand::Quit);

        Ok(())
    }

    /// Project the newest snapshot if one arrived since the last frame.
    fn sync_snapshot(&mut self) {
        // Err means the poller is gone; keep showing the last view.
        if !self.snapshot_rx.has_changed().unwrap_or(false) {
            return;
        }
        let snapshot = self.snapshot_rx.borrow_and_update().clone();
        debug!(cycle = snapshot.cycle, loading = snapshot.is_loading(), "Snapshot received");
        self.state.apply(&snapshot);
    }

    /// Handle a key press.
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('r') => {
                let _ = self.cmd_tx.try_send(BackendCommand::Refresh);
                false
            }
            _ => false,
        }
    }
}
