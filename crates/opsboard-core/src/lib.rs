//! opsboard Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - HTTP clients or servers
//! - Terminal rendering
//! - Runtime specifics
//!
//! It describes the stats/run/worker model served by the stats and run
//! endpoints, the source contracts the poller consumes, and the snapshot
//! the dashboard renders.

pub mod demo;
pub mod error;
pub mod ids;
pub mod outcome;
pub mod run;
pub mod source;
pub mod stats;
pub mod status;

// Re-export commonly used types
pub use error::{CoreError, SourceError};
pub use ids::{RunId, WorkerId};
pub use outcome::{CycleOutcome, CycleState, NoRunReason, Phase, Snapshot};
pub use run::{Run, Worker};
pub use source::{RunSource, StatsSource};
pub use stats::Stats;
pub use status::WorkerStatus;
