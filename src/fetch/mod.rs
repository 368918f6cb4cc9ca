//! Remote retrieval boundary.
//!
//! `RemoteFetch` is the seam between the engine and the transport. All
//! failure is encoded in the returned `FetchResponse`; implementations must
//! not panic or throw past this boundary. The fetch call is the only
//! operation in the pipeline expected to take non-trivial wall-clock time.

pub mod http;

use async_trait::async_trait;

pub use http::HttpFetcher;

/// Outcome of a single remote retrieval.
#[derive(Debug, Clone)]
pub enum FetchResponse {
    /// Response body bytes from a successful request.
    Ok(Vec<u8>),
    /// The server answered with a non-success status.
    HttpError { status: u16, message: String },
    /// The request never completed (DNS, connect, timeout, ...).
    NetworkError(String),
}

impl FetchResponse {
    /// Human-readable failure text for the error variants.
    pub fn error_message(&self) -> Option<String> {
        match self {
            FetchResponse::Ok(_) => None,
            FetchResponse::HttpError { status, message } => {
                Some(format!("HTTP error {status}: {message}"))
            }
            FetchResponse::NetworkError(message) => Some(format!("Network error: {message}")),
        }
    }
}

#[async_trait]
pub trait RemoteFetch: Send + Sync {
    /// Retrieve the resource at `path`.
    async fn fetch(&self, path: &str) -> FetchResponse;
}
