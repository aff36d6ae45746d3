//! HTTP request handlers.

mod health;
mod runs;
mod stats;

pub use health::{health_check, metrics_handler};
pub use runs::get_run;
pub use stats::get_stats;
