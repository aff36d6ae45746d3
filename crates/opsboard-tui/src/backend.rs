//! Background task for polling the stats and run endpoints.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use opsboard_client::Poller;
use opsboard_core::{RunSource, StatsSource};

use crate::event::BackendCommand;

/// Run the background polling loop.
///
/// This function runs in a separate thread with its own tokio runtime.
/// Every tick (and every manual refresh) runs one poller cycle; results
/// reach the UI thread through the poller's snapshot store, never through
/// this loop.
pub async fn run_backend<S, R>(
    poller: Arc<Poller<S, R>>,
    refresh_interval: Duration,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
) where
    S: StatsSource,
    R: RunSource,
{
    info!(interval_secs = refresh_interval.as_secs(), "Polling started");

    let mut interval = tokio::time::interval(refresh_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            // Periodic refresh tick
            _ = interval.tick() => {
                debug!("Refresh tick");
                poller.refresh().await;
            }

            // Commands from UI thread
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(BackendCommand::Refresh) => {
                        debug!("Manual refresh");
                        poller.refresh().await;
                    }
                    Some(BackendCommand::Quit) | None => {
                        info!("Received quit command, shutting down backend");
                        break;
                    }
                }
            }
        }
    }

    info!("Backend shutdown complete");
}
