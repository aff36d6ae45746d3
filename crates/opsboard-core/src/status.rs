//! Worker status values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a Worker (one pipeline stage) within a Run.
///
/// The wire contract restricts this to four lowercase values. Anything else
/// is kept verbatim in [`WorkerStatus::Unknown`] so a misbehaving run source
/// can never make deserialization fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkerStatus {
    /// Stage has not started yet.
    Pending,
    /// Stage is executing.
    Running,
    /// Stage finished successfully.
    Completed,
    /// Stage finished with an error.
    Failed,
    /// Value outside the contract, carried as received.
    Unknown(String),
}

impl WorkerStatus {
    /// The four statuses defined by the run contract, in pipeline order.
    pub const KNOWN: [WorkerStatus; 4] = [
        WorkerStatus::Pending,
        WorkerStatus::Running,
        WorkerStatus::Completed,
        WorkerStatus::Failed,
    ];

    /// Parse a wire value. Never fails.
    pub fn parse(value: &str) -> Self {
        Self::from(value.to_string())
    }

    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown(raw) => raw,
        }
    }

    /// Returns true if the stage reached a final state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Returns false for values outside the contract.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for WorkerStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "running" => Self::Running,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Unknown(value),
        }
    }
}

impl From<WorkerStatus> for String {
    fn from(status: WorkerStatus) -> Self {
        match status {
            WorkerStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
