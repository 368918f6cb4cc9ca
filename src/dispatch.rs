//! Load dispatcher.
//!
//! Entry point that inspects a request's `SourceKind` and routes it: the
//! bundled path is a synchronous lookup-and-decode, the remote path hands
//! off to the fetch-and-cache engine on a spawned Tokio task so the caller
//! never blocks on the network.

use std::sync::Arc;

use anyhow::Result;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::bundle::BundleStore;
use crate::cache::CacheStore;
use crate::config::Config;
use crate::decode;
use crate::engine::Engine;
use crate::error::LoadError;
use crate::events::{self, LoadEvent};
use crate::fetch::HttpFetcher;
use crate::request::{LoadRequest, SourceKind};

pub struct Dispatcher {
    bundle: Arc<BundleStore>,
    engine: Arc<Engine>,
}

impl Dispatcher {
    pub fn new(bundle: Arc<BundleStore>, engine: Arc<Engine>) -> Self {
        Self { bundle, engine }
    }

    /// Wire up a dispatcher with the on-disk cache location from [`Config`]
    /// and the HTTP fetcher.
    pub fn with_defaults(bundle: BundleStore) -> Result<Self> {
        let config = Config::load()?;
        let cache = CacheStore::new(config.cache_dir()?)?;
        let fetcher = HttpFetcher::new()?;
        let engine = Engine::new(Arc::new(cache), Arc::new(fetcher));
        Ok(Self::new(Arc::new(bundle), Arc::new(engine)))
    }

    /// Route a request to its source. Remote requests run as independent
    /// tasks; there is no deduplication or coalescing of concurrent
    /// requests for the same path.
    pub fn dispatch<T>(&self, request: LoadRequest<T>)
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        debug!(path = %request.path, source = ?request.source, "Dispatching load request");
        match request.source {
            SourceKind::Bundled => self.load_bundled(request),
            SourceKind::Remote => {
                let engine = Arc::clone(&self.engine);
                tokio::spawn(async move {
                    engine.run(request).await;
                });
            }
        }
    }

    /// Synchronous bundled path: keyed lookup, decode, same empty-result
    /// signaling as the engine.
    fn load_bundled<T>(&self, request: LoadRequest<T>)
    where
        T: DeserializeOwned,
    {
        let LoadRequest {
            path,
            events: tx,
            on_complete,
            ..
        } = request;

        match self.read_bundled::<T>(&path) {
            Ok(data) => {
                let data = Arc::new(data);
                events::emit(&tx, LoadEvent::DataLoaded(Arc::clone(&data)));
                if let Some(callback) = on_complete {
                    callback(data);
                }
            }
            Err(e) => {
                warn!(path = %path, error = %e, "Bundled load failed");
                events::emit(&tx, LoadEvent::RequestLoadDataError(e.to_string()));
            }
        }
    }

    fn read_bundled<T>(&self, path: &str) -> Result<T, LoadError>
    where
        T: DeserializeOwned,
    {
        let bytes = self
            .bundle
            .get(path)
            .ok_or_else(|| LoadError::ResourceNotFound(path.to_string()))?;
        let value = decode::decode_value(bytes)?;
        if value.is_null() {
            return Err(LoadError::EmptyResult);
        }
        decode::decode_into(value)
    }
}
