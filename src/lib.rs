//! fetchcache - JSON data loading with a persistent fetch-and-cache engine.
//!
//! Loads structured JSON data from either a bundled in-process store or a
//! remote HTTP endpoint, decoding it into a strongly-typed object or a
//! generic string-keyed mapping. Remote loads go through a cache-aware
//! engine: serve from the on-disk cache when permitted, fetch otherwise,
//! fall back to the last cached copy when the network fails, and refresh
//! the cache after a successful fetch. Each request runs independently and
//! fires exactly one completion event.
//!
//! ```no_run
//! use fetchcache::{events, BundleStore, Dispatcher, LoadEvent, LoadRequest, Mapping};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let dispatcher = Dispatcher::with_defaults(BundleStore::new())?;
//!
//! let (tx, mut rx) = events::channel::<Mapping>();
//! dispatcher.dispatch(LoadRequest::remote("https://example.com/config.json", tx));
//!
//! match rx.recv().await {
//!     Some(LoadEvent::DataLoaded(mapping)) => println!("loaded {} keys", mapping.len()),
//!     Some(LoadEvent::RequestLoadDataError(msg)) => eprintln!("load failed: {msg}"),
//!     None => unreachable!("exactly one event fires per request"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod cache;
pub mod config;
pub mod decode;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod events;
pub mod fetch;
pub mod request;

pub use bundle::BundleStore;
pub use cache::CacheStore;
pub use config::Config;
pub use decode::Mapping;
pub use dispatch::Dispatcher;
pub use engine::Engine;
pub use error::LoadError;
pub use events::LoadEvent;
pub use fetch::{FetchResponse, HttpFetcher, RemoteFetch};
pub use request::{LoadRequest, SourceKind};
