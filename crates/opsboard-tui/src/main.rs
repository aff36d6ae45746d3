//! opsboard terminal dashboard.
//!
//! Polls an opsboard server for catalog counters and the active run, and
//! shows them either as a live dashboard or as a one-shot text snapshot.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use opsboard_client::{ClientError, HttpClient, Poller};
use opsboard_core::Phase;
use opsboard_ui::{render_text, DashboardView};

mod app;
mod backend;
mod event;
mod state;
mod ui;

use app::App;
use event::BackendCommand;

const LOG_PATH: &str = "/tmp/opsboard-tui.log";

#[derive(Parser)]
#[command(name = "opsboard-tui")]
#[command(about = "opsboard terminal dashboard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Live dashboard - counters, active plan and worker progress
    #[command(alias = "d")]
    Dashboard {
        /// opsboard server base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        endpoint: String,

        /// Refresh interval in seconds
        #[arg(short, long, default_value = "2")]
        refresh: u64,

        /// Per-request timeout in seconds
        #[arg(short, long, default_value = "10")]
        timeout: u64,
    },

    /// Run one refresh cycle and print the dashboard as text
    Snapshot {
        /// opsboard server base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        endpoint: String,

        /// Per-request timeout in seconds
        #[arg(short, long, default_value = "10")]
        timeout: u64,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard {
            endpoint,
            refresh,
            timeout,
        } => {
            // Logs go to a file so the terminal is left to the dashboard.
            if let Ok(file) = std::fs::File::create(LOG_PATH) {
                tracing_subscriber::fmt()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_env_filter(env_filter())
                    .with_ansi(false)
                    .init();
            }
            run_dashboard(&endpoint, refresh, timeout)?;
        }
        Commands::Snapshot { endpoint, timeout } => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter())
                .init();
            run_snapshot(&endpoint, timeout)?;
        }
    }

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// HTTP client whose requests give up after `timeout` seconds (at least one).
fn http_client(endpoint: &str, timeout: u64) -> Result<HttpClient, ClientError> {
    HttpClient::with_timeout(endpoint, Duration::from_secs(timeout.max(1)))
}

fn run_dashboard(endpoint: &str, refresh: u64, timeout: u64) -> Result<(), Box<dyn Error>> {
    info!(endpoint = %endpoint, refresh, timeout, "Starting dashboard");

    let poller = Arc::new(Poller::over_http(http_client(endpoint, timeout)?));
    let snapshot_rx = poller.subscribe();
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(16);

    // Zero would make the interval panic.
    let refresh_interval = Duration::from_secs(refresh.max(1));

    let backend_poller = Arc::clone(&poller);
    let backend_handle = std::thread::spawn(move || {
        match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(backend::run_backend(backend_poller, refresh_interval, cmd_rx)),
            Err(e) => error!(error = %e, "Failed to create tokio runtime"),
        }
    });

    let terminal = ratatui::init();
    let mut app = App::new(snapshot_rx, cmd_tx, endpoint);
    let result = app.run(terminal);
    ratatui::restore();

    let _ = backend_handle.join();

    info!("Dashboard exited");
    result.map_err(|e| e.into())
}

fn run_snapshot(endpoint: &str, timeout: u64) -> Result<(), Box<dyn Error>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let poller = Poller::over_http(http_client(endpoint, timeout)?);
    let outcome = rt.block_on(poller.refresh());

    let view = DashboardView::project(&poller.store().current());
    print!("{}", render_text(&view));

    if outcome.phase() == Phase::Error {
        let message = outcome
            .error()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "refresh failed".to_string());
        return Err(format!("{}: {}", endpoint, message).into());
    }

    Ok(())
}
