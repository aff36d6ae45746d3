//! opsboard Server

use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use opsboard_server::{create_router, AppState, Config, Fixture};

/// Serves the stats and run endpoints polled by the opsboard dashboard.
#[derive(Parser, Debug)]
#[command(name = "opsboard-server", version)]
struct Args {
    /// HTTP bind address
    #[arg(long)]
    bind: Option<String>,

    /// JSON fixture (`{"stats": ..., "runs": [...]}`) to serve instead of the demo data
    #[arg(long)]
    fixture: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let defaults = Config::default();
    let config = Config {
        bind_addr: args.bind.unwrap_or(defaults.bind_addr),
        fixture: args.fixture,
    };
    let addr: SocketAddr = config.bind_addr.parse()?;

    let state = match &config.fixture {
        Some(path) => {
            info!(fixture = %path.display(), "Serving fixture");
            AppState::from_fixture(Fixture::load(path)?)
        }
        None => {
            info!("Serving demo data");
            AppState::demo()
        }
    };

    info!(runs = state.run_count().await, "State loaded");

    let router = create_router(state);
    let listener = TcpListener::bind(addr).await?;

    info!(addr = %addr, "HTTP server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
