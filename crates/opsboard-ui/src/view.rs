//! Pure projection from a snapshot to what the dashboard shows.

use opsboard_core::{CycleOutcome, Phase, Run, RunId, Snapshot, Stats, WorkerId, WorkerStatus};

/// Shown for a counter when no stats are available.
pub const PLACEHOLDER: &str = "-";

/// Shown for a counter while a cycle is in flight.
pub const LOADING: &str = "...";

/// Plan panel message whenever there is no run to show.
pub const NO_ACTIVE_PLAN: &str = "No active orchestration plan";

/// Animation frames for the running badge.
pub const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Visual treatment of a worker status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Completed,
    Running,
    Pending,
    Failed,
    /// Status outside the contract; drawn neutral.
    Unknown,
}

impl BadgeKind {
    pub fn for_status(status: &WorkerStatus) -> Self {
        match status {
            WorkerStatus::Completed => Self::Completed,
            WorkerStatus::Running => Self::Running,
            WorkerStatus::Pending => Self::Pending,
            WorkerStatus::Failed => Self::Failed,
            WorkerStatus::Unknown(_) => Self::Unknown,
        }
    }

    /// Static icon. Running uses the first spinner frame.
    pub fn icon(self) -> char {
        match self {
            Self::Completed => '✓',
            Self::Running => SPINNER_FRAMES[0],
            Self::Pending => '◷',
            Self::Failed => '✗',
            Self::Unknown => '?',
        }
    }

    /// Only running badges animate.
    pub fn spins(self) -> bool {
        self == Self::Running
    }
}

/// Status badge of one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    /// Status string with its first character upper-cased.
    pub label: String,
}

impl Badge {
    pub fn for_status(status: &WorkerStatus) -> Self {
        Self {
            kind: BadgeKind::for_status(status),
            label: capitalize_first(status.as_str()),
        }
    }

    /// Icon for the given animation frame.
    pub fn icon(&self, frame: usize) -> char {
        if self.kind.spins() {
            SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
        } else {
            self.kind.icon()
        }
    }
}

/// Upper-case the first character and leave the rest untouched.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Value of one counter card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatValue {
    Loading,
    /// No stats this cycle. Distinct from a zero count.
    Missing,
    Count(u64),
}

impl StatValue {
    pub fn text(&self) -> String {
        match self {
            Self::Loading => LOADING.to_string(),
            Self::Missing => PLACEHOLDER.to_string(),
            Self::Count(n) => n.to_string(),
        }
    }
}

/// One counter card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: StatValue,
}

/// One row of the current workers list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerRow {
    pub id: WorkerId,
    pub label: String,
    pub badge: Badge,
    pub eta: Option<String>,
}

impl WorkerRow {
    /// `ETA: <eta>`, or nothing at all when the worker has no ETA.
    pub fn eta_line(&self) -> Option<String> {
        self.eta.as_ref().map(|eta| format!("ETA: {}", eta))
    }
}

/// The active plan with its run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePlan {
    pub plan_name: String,
    pub run_id: RunId,
    /// Raw lifecycle status of the run, shown as-is.
    pub run_status: String,
    pub started_at: String,
    /// In the order the run source returned them.
    pub workers: Vec<WorkerRow>,
}

impl ActivePlan {
    fn project(stats: &Stats, run: &Run) -> Self {
        Self {
            plan_name: stats.active_plan_name.clone(),
            run_id: run.id.clone(),
            run_status: run.status.clone(),
            started_at: run.started_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            workers: run
                .workers
                .iter()
                .map(|w| WorkerRow {
                    id: w.id.clone(),
                    label: w.label.clone(),
                    badge: Badge::for_status(&w.status),
                    // An empty ETA is no ETA.
                    eta: w.eta.clone().filter(|eta| !eta.is_empty()),
                })
                .collect(),
        }
    }
}

/// Why the plan panel is empty. All reasons render [`NO_ACTIVE_PLAN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoActiveRun,
    RunUnavailable,
    StatsUnavailable,
}

/// Content of the "Active Orchestration Plan" panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanPanel {
    Loading,
    Active(ActivePlan),
    Empty(EmptyReason),
}

impl PlanPanel {
    /// Message shown instead of a plan, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Empty(_) => Some(NO_ACTIVE_PLAN),
            _ => None,
        }
    }
}

/// Everything the dashboard displays for one snapshot.
///
/// Carries no cycle number: two cycles with equal data project to equal
/// views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub phase: Phase,
    pub stat_cards: [StatCard; 4],
    pub plan: PlanPanel,
    /// Error of the cycle, for the status line.
    pub notice: Option<String>,
}

impl DashboardView {
    /// Project a snapshot. Total over every snapshot; never fails.
    pub fn project(snapshot: &Snapshot) -> Self {
        let outcome = snapshot.outcome();

        let value = |count: fn(&Stats) -> u64| match outcome {
            None => StatValue::Loading,
            Some(outcome) => outcome
                .stats()
                .map_or(StatValue::Missing, |stats| StatValue::Count(count(stats))),
        };

        let stat_cards = [
            StatCard {
                title: "Plugins",
                value: value(|s| s.plugins),
            },
            StatCard {
                title: "Agents",
                value: value(|s| s.agents),
            },
            StatCard {
                title: "Skills",
                value: value(|s| s.skills),
            },
            StatCard {
                title: "Orchestrators",
                value: value(|s| s.orchestrators),
            },
        ];

        let plan = match outcome {
            None => PlanPanel::Loading,
            Some(CycleOutcome::Ready { stats, run }) => {
                PlanPanel::Active(ActivePlan::project(stats, run))
            }
            Some(CycleOutcome::NoActiveRun { .. }) => PlanPanel::Empty(EmptyReason::NoActiveRun),
            Some(CycleOutcome::RunUnavailable { .. }) => {
                PlanPanel::Empty(EmptyReason::RunUnavailable)
            }
            Some(CycleOutcome::Failed { .. }) => PlanPanel::Empty(EmptyReason::StatsUnavailable),
        };

        let notice = match outcome {
            Some(CycleOutcome::Failed { error }) => Some(format!("Stats unavailable: {}", error)),
            _ => None,
        };

        Self {
            phase: snapshot.phase(),
            stat_cards,
            plan,
            notice,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}
