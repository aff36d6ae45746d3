//! HTTP client for the stats and run endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use opsboard_core::{Run, RunId, RunSource, SourceError, Stats, StatsSource};

use crate::error::ClientError;

/// Requests that take longer than this fail as network errors.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the dashboard's REST endpoints.
///
/// `base_url` may carry a path prefix (e.g. `http://host/api`); endpoint
/// paths are appended to it.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client with [`DEFAULT_TIMEOUT`].
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests (connect, headers and body) fail
    /// after `timeout`, so a silent server cannot hold a refresh cycle open.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(inner, base_url))
    }

    /// Create a client around a preconfigured `reqwest::Client`.
    pub fn with_client(inner: reqwest::Client, base_url: &str) -> Self {
        Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check if the server is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let url = self.endpoint(&["health"])?;
        debug!(url = %url, "Checking health");

        let response = self.inner.get(url).send().await?;
        Ok(response.status().is_success())
    }

    /// `GET /stats`.
    pub async fn stats(&self) -> Result<Stats, ClientError> {
        self.get_json(self.endpoint(&["stats"])?).await
    }

    /// `GET /runs/{runId}`.
    pub async fn run(&self, run_id: &RunId) -> Result<Run, ClientError> {
        self.get_json(self.endpoint(&["runs", run_id.as_str()])?).await
    }

    /// Build an endpoint URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Get JSON from an endpoint.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(url = %url, "GET request");

        let response = self.inner.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                path: url.path().to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl StatsSource for HttpClient {
    async fn get_stats(&self) -> Result<Stats, SourceError> {
        Ok(self.stats().await?)
    }
}

#[async_trait]
impl RunSource for HttpClient {
    async fn get_run(&self, run_id: &RunId) -> Result<Run, SourceError> {
        Ok(self.run(run_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_to_base_path() {
        let client = HttpClient::new("http://localhost:3000/api/").unwrap();
        let url = client.endpoint(&["runs", "run_abc123"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/runs/run_abc123");
    }

    #[test]
    fn test_endpoint_encodes_run_id() {
        let client = HttpClient::new("http://localhost:3000").unwrap();
        let url = client.endpoint(&["runs", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/runs/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base_url() {
        let client = HttpClient::new("not a url").unwrap();
        assert!(matches!(
            client.endpoint(&["stats"]),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_network_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = HttpClient::new(&format!("http://127.0.0.1:{}", port)).unwrap();
        let err = client.get_stats().await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_silent_server_times_out_as_network_failure() {
        // Accepts connections and never writes a byte.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client =
            HttpClient::with_timeout(&format!("http://{}", addr), Duration::from_millis(200))
                .unwrap();
        let result =
            tokio::time::timeout(Duration::from_secs(5), client.get_run(&RunId::new("run_1")))
                .await
                .expect("request outlived its timeout");

        let err = result.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)), "got {:?}", err);
    }
}
