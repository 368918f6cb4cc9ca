use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Bundled resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to read cache entry {name}")]
    CacheRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write cache entry {name}")]
    CacheWrite {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode payload: {0}")]
    Decode(String),

    #[error("No data: decoded payload was empty")]
    EmptyResult,

    #[error("Invalid request path: {0:?}")]
    InvalidPath(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl LoadError {
    /// Truncate a response body to avoid carrying excessive data in messages
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    pub fn from_status(status: u16, body: &str) -> Self {
        LoadError::Http {
            status,
            message: Self::truncate_body(body),
        }
    }
}
