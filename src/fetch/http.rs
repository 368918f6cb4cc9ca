//! HTTP transport for remote loads.
//!
//! Plain GET against the request path. Timeouts are handled here by the
//! underlying client, not modeled by the engine.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::LoadError;

use super::{FetchResponse, RemoteFetch};

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Reqwest-backed fetcher.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    /// Build a fetcher around an existing client, keeping its pool and
    /// timeout configuration.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteFetch for HttpFetcher {
    async fn fetch(&self, path: &str) -> FetchResponse {
        debug!(path, "Fetching remote data");

        let response = match self.client.get(path).send().await {
            Ok(response) => response,
            Err(e) => return FetchResponse::NetworkError(e.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return FetchResponse::HttpError {
                status: status.as_u16(),
                message: LoadError::truncate_body(&body),
            };
        }

        match response.bytes().await {
            Ok(bytes) => FetchResponse::Ok(bytes.to_vec()),
            Err(e) => FetchResponse::NetworkError(e.to_string()),
        }
    }
}
