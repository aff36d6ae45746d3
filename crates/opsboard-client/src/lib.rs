//! Client library for the opsboard dashboard.
//!
//! Provides the HTTP client for the stats and run endpoints, the status
//! poller that turns one fetch cycle into a [`CycleOutcome`], and the
//! snapshot store the poller publishes into.
//!
//! [`CycleOutcome`]: opsboard_core::CycleOutcome

pub mod error;
pub mod http;
pub mod poller;
pub mod store;

pub use error::ClientError;
pub use http::{HttpClient, DEFAULT_TIMEOUT};
pub use poller::Poller;
pub use store::SnapshotStore;
