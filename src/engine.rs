//! Fetch-and-cache engine.
//!
//! One run per request: check the cache, fetch over the network when the
//! cache cannot answer, fall back to the cached copy when the network
//! fails, and refresh the cache after a successful fetch. The engine holds
//! no state across requests; all of its collaborators are injected so tests
//! can substitute fakes.
//!
//! Flow per request:
//!
//! ```text
//! CacheCheck -> CacheHit ------------------+
//!            -> NetworkFetch -> success ---+-> decode -> DataLoaded
//!                            -> failure -> cache fallback -> decode
//!                                       -> no cache -> RequestLoadDataError
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::cache::{file_name_for, CacheStore};
use crate::decode;
use crate::error::LoadError;
use crate::events::{self, LoadEvent};
use crate::fetch::{FetchResponse, RemoteFetch};
use crate::request::LoadRequest;

/// Where the payload bytes came from, or why there are none.
/// Decode-phase failures are carried by `LoadError` instead.
enum FetchOutcome {
    CacheHit(Vec<u8>),
    NetworkSuccess(Vec<u8>),
    NetworkFailureWithCacheFallback(Vec<u8>),
    NetworkFailureNoCache(LoadError),
}

pub struct Engine {
    cache: Arc<CacheStore>,
    fetcher: Arc<dyn RemoteFetch>,
}

impl Engine {
    pub fn new(cache: Arc<CacheStore>, fetcher: Arc<dyn RemoteFetch>) -> Self {
        Self { cache, fetcher }
    }

    /// Run a remote load request to its terminal state, emitting exactly
    /// one completion event. The success callback, if any, fires right
    /// after the event.
    pub async fn run<T>(&self, request: LoadRequest<T>)
    where
        T: DeserializeOwned,
    {
        let LoadRequest {
            path,
            use_cache,
            force_refresh,
            events: tx,
            on_complete,
            ..
        } = request;

        match self.load(&path, use_cache, force_refresh).await {
            Ok(data) => {
                let data = Arc::new(data);
                events::emit(&tx, LoadEvent::DataLoaded(Arc::clone(&data)));
                if let Some(callback) = on_complete {
                    callback(data);
                }
            }
            Err(e) => {
                warn!(path = %path, error = %e, "Load request failed");
                events::emit(&tx, LoadEvent::RequestLoadDataError(e.to_string()));
            }
        }
    }

    async fn load<T>(&self, path: &str, use_cache: bool, force_refresh: bool) -> Result<T, LoadError>
    where
        T: DeserializeOwned,
    {
        let file_name = file_name_for(path)
            .ok_or_else(|| LoadError::InvalidPath(path.to_string()))?
            .to_string();

        let outcome = self.resolve(path, &file_name, use_cache, force_refresh).await?;

        let bytes = match outcome {
            FetchOutcome::CacheHit(bytes) => {
                debug!(name = %file_name, "Loaded data from cache");
                bytes
            }
            FetchOutcome::NetworkSuccess(bytes) => {
                debug!(path, len = bytes.len(), "Loaded data from network");
                bytes
            }
            FetchOutcome::NetworkFailureWithCacheFallback(bytes) => {
                info!(name = %file_name, "Loaded from cache following network error");
                bytes
            }
            FetchOutcome::NetworkFailureNoCache(err) => return Err(err),
        };

        let value = decode::decode_value(&bytes)?;
        if value.is_null() {
            // The decoder accepts a bare JSON null; a null result is still
            // useless to the caller.
            return Err(LoadError::EmptyResult);
        }
        decode::decode_into(value)
    }

    /// Resolve the payload bytes for a request. Cache read failures
    /// propagate as `CacheRead` errors; cache write failures after a
    /// successful fetch are logged and swallowed.
    async fn resolve(
        &self,
        path: &str,
        file_name: &str,
        use_cache: bool,
        force_refresh: bool,
    ) -> Result<FetchOutcome, LoadError> {
        if use_cache && !force_refresh && self.cache.exists(file_name) {
            return Ok(FetchOutcome::CacheHit(self.cache.read(file_name)?));
        }

        match self.fetcher.fetch(path).await {
            FetchResponse::Ok(bytes) => {
                if use_cache || force_refresh {
                    if let Err(e) = self.cache.write(file_name, &bytes) {
                        warn!(name = %file_name, error = %e, "Cache refresh failed, result still delivered");
                    }
                }
                Ok(FetchOutcome::NetworkSuccess(bytes))
            }
            FetchResponse::HttpError { status, message } => {
                self.fall_back(file_name, LoadError::Http { status, message })
            }
            FetchResponse::NetworkError(message) => {
                self.fall_back(file_name, LoadError::Network(message))
            }
        }
    }

    /// After a failed fetch, serve the last-known-good cache entry if one
    /// exists; otherwise the fetch error is terminal.
    fn fall_back(&self, file_name: &str, err: LoadError) -> Result<FetchOutcome, LoadError> {
        if self.cache.exists(file_name) {
            Ok(FetchOutcome::NetworkFailureWithCacheFallback(
                self.cache.read(file_name)?,
            ))
        } else {
            Ok(FetchOutcome::NetworkFailureNoCache(err))
        }
    }
}
