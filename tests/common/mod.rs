//! Shared test fixtures: a scripted fetcher and event helpers.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fetchcache::events::EventReceiver;
use fetchcache::{CacheStore, Engine, FetchResponse, LoadEvent, RemoteFetch};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; control verbosity with RUST_LOG.
pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Fetcher that replays a scripted list of responses and counts calls.
pub struct FakeFetcher {
    responses: Mutex<VecDeque<FetchResponse>>,
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn new(responses: Vec<FetchResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteFetch for FakeFetcher {
    async fn fetch(&self, _path: &str) -> FetchResponse {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| FetchResponse::NetworkError("no scripted response".to_string()))
    }
}

/// Engine over a temp-dir cache and a scripted fetcher.
pub fn engine_with(
    dir: &TempDir,
    responses: Vec<FetchResponse>,
) -> (Engine, Arc<FakeFetcher>, Arc<CacheStore>) {
    init_tracing();
    let cache = Arc::new(CacheStore::new(dir.path().join("cache")).expect("Failed to open store"));
    let fetcher = Arc::new(FakeFetcher::new(responses));
    let engine = Engine::new(Arc::clone(&cache), Arc::clone(&fetcher) as Arc<dyn RemoteFetch>);
    (engine, fetcher, cache)
}

/// Receive the single success payload, panicking on an error event.
pub async fn expect_loaded<T: std::fmt::Debug>(rx: &mut EventReceiver<T>) -> Arc<T> {
    match rx.recv().await {
        Some(LoadEvent::DataLoaded(data)) => data,
        Some(LoadEvent::RequestLoadDataError(msg)) => panic!("unexpected error event: {msg}"),
        None => panic!("channel closed without an event"),
    }
}

/// Receive the single error message, panicking on a success event.
pub async fn expect_error<T: std::fmt::Debug>(rx: &mut EventReceiver<T>) -> String {
    match rx.recv().await {
        Some(LoadEvent::RequestLoadDataError(msg)) => msg,
        Some(LoadEvent::DataLoaded(data)) => panic!("unexpected success event: {data:?}"),
        None => panic!("channel closed without an event"),
    }
}

/// Assert the channel delivered nothing further and is closed.
pub fn expect_no_more<T>(rx: &mut EventReceiver<T>) {
    match rx.try_recv() {
        Err(_) => {}
        Ok(_) => panic!("received a second event for the same request"),
    }
}
