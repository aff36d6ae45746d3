use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use chrono::{TimeZone, Utc};

use opsboard_core::{Run, Stats, Worker, WorkerStatus};
use opsboard_server::{create_router, AppState, Fixture};

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with the demo data, started at a fixed time.
    pub async fn new() -> Self {
        Self::with_state(AppState::from_fixture(Fixture::demo(started_at()))).await
    }

    /// Start a test server with the given stats and runs.
    pub async fn with_data(stats: Stats, runs: Vec<Run>) -> Self {
        Self::with_state(AppState::new(stats, runs)).await
    }

    async fn with_state(state: Arc<AppState>) -> Self {
        Self::with_router(create_router(state)).await
    }

    /// Start a test server around an arbitrary router.
    pub async fn with_router(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Base URL of a listener that accepts connections and never answers.
pub async fn silent_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}", addr)
}

pub fn started_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

/// A run whose worker ids collide.
pub fn run_with_duplicate_workers(id: &str) -> Run {
    Run::new(id, "running", started_at())
        .with_worker(Worker::new("w", "First", WorkerStatus::Completed))
        .with_worker(Worker::new("w", "Second", WorkerStatus::Pending))
}
