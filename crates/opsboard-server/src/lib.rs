//! opsboard Server Library
//!
//! Serves the two read-only JSON resources the dashboard polls
//! (`/stats` and `/runs/{runId}`) from an in-memory state, plus health and
//! Prometheus metrics endpoints.

pub mod config;
pub mod fixture;
pub mod http;
pub mod metrics;
pub mod state;

pub use config::Config;
pub use fixture::{Fixture, FixtureError};
pub use http::create_router;
pub use state::AppState;
