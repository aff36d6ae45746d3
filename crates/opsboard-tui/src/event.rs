//! Commands sent from the UI thread to the polling backend.

/// Commands sent from UI to the background task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    /// Start a refresh cycle now.
    Refresh,

    /// Stop polling and exit.
    Quit,
}
