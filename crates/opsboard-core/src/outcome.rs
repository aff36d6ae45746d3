//! Result of one refresh cycle and the snapshot the dashboard displays.

use crate::{Run, SourceError, Stats};

/// Structured result of a single refresh cycle.
///
/// Errors never cross the poller boundary; they are folded into one of
/// these variants instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Stats and the active run were both fetched.
    Ready { stats: Stats, run: Run },

    /// Stats fetched; they name no active run, so none was requested.
    NoActiveRun { stats: Stats },

    /// Stats fetched; the run they name could not be fetched.
    RunUnavailable { stats: Stats, error: SourceError },

    /// Stats could not be fetched. Nothing from this cycle is shown.
    Failed { error: SourceError },
}

impl CycleOutcome {
    pub fn stats(&self) -> Option<&Stats> {
        match self {
            Self::Ready { stats, .. }
            | Self::NoActiveRun { stats }
            | Self::RunUnavailable { stats, .. } => Some(stats),
            Self::Failed { .. } => None,
        }
    }

    pub fn run(&self) -> Option<&Run> {
        match self {
            Self::Ready { run, .. } => Some(run),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SourceError> {
        match self {
            Self::RunUnavailable { error, .. } | Self::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// View phase this outcome settles into.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Ready { .. } => Phase::ReadyWithRun,
            Self::NoActiveRun { .. } => Phase::ReadyWithoutRun(NoRunReason::NoActiveRun),
            Self::RunUnavailable { .. } => Phase::ReadyWithoutRun(NoRunReason::RunUnavailable),
            Self::Failed { .. } => Phase::Error,
        }
    }
}

/// Why a settled cycle has no run to show.
///
/// Both reasons look the same on screen; they are kept apart for logging
/// and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoRunReason {
    /// Stats carried no active run id.
    NoActiveRun,
    /// Stats named a run but fetching it failed.
    RunUnavailable,
}

/// Dashboard state machine: `Loading` moves to exactly one of the other
/// phases per cycle, and back to `Loading` when the next cycle starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    ReadyWithRun,
    ReadyWithoutRun(NoRunReason),
    Error,
}

/// State of the cycle a snapshot belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleState {
    /// Fetches are in flight.
    Loading,
    /// The cycle terminated with this outcome.
    Settled(CycleOutcome),
}

/// The value currently displayed: one cycle's state, replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Cycle sequence number. Strictly increasing per poller; 0 is the
    /// state before the first refresh.
    pub cycle: u64,
    pub state: CycleState,
}

impl Snapshot {
    /// State before any refresh has started.
    pub fn initial() -> Self {
        Self::loading(0)
    }

    pub fn loading(cycle: u64) -> Self {
        Self {
            cycle,
            state: CycleState::Loading,
        }
    }

    pub fn settled(cycle: u64, outcome: CycleOutcome) -> Self {
        Self {
            cycle,
            state: CycleState::Settled(outcome),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, CycleState::Loading)
    }

    pub fn outcome(&self) -> Option<&CycleOutcome> {
        match &self.state {
            CycleState::Loading => None,
            CycleState::Settled(outcome) => Some(outcome),
        }
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.outcome().and_then(CycleOutcome::stats)
    }

    pub fn run(&self) -> Option<&Run> {
        self.outcome().and_then(CycleOutcome::run)
    }

    pub fn phase(&self) -> Phase {
        self.outcome().map_or(Phase::Loading, CycleOutcome::phase)
    }

    /// Whether this snapshot may replace `current`.
    ///
    /// A newer cycle always wins. Within the same cycle only the move from
    /// loading to settled is accepted, so each cycle settles at most once.
    pub fn supersedes(&self, current: &Snapshot) -> bool {
        if self.cycle != current.cycle {
            return self.cycle > current.cycle;
        }
        current.is_loading() && !self.is_loading()
    }
}
