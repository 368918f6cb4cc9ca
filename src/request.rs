//! Load request descriptions.
//!
//! A `LoadRequest` is created by the caller per invocation and consumed by
//! the dispatcher or engine; it fires exactly one completion signal and is
//! then discarded. The decoded target type is the type parameter `T`.
//! Callers that want a generic string-keyed mapping use [`Mapping`].
//!
//! [`Mapping`]: crate::decode::Mapping

use std::sync::Arc;

use crate::events::EventSender;

/// Where the data for a request comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Data shipped with the application, looked up in the bundle store.
    Bundled,
    /// Data fetched over HTTP, with the persistent cache in front.
    Remote,
}

/// Callback invoked with the decoded result after the success event is
/// emitted. Never invoked on failure.
pub type OnComplete<T> = Box<dyn FnOnce(Arc<T>) + Send>;

pub struct LoadRequest<T> {
    pub path: String,
    pub source: SourceKind,
    /// Permit reading a previously cached copy.
    pub use_cache: bool,
    /// Skip the cache read, always hit the network, still refresh the cache
    /// on success.
    pub force_refresh: bool,
    pub(crate) events: EventSender<T>,
    pub(crate) on_complete: Option<OnComplete<T>>,
}

impl<T> LoadRequest<T> {
    /// Request a remote load with the default cache policy
    /// (`use_cache = true`, `force_refresh = false`).
    pub fn remote(path: impl Into<String>, events: EventSender<T>) -> Self {
        Self {
            path: path.into(),
            source: SourceKind::Remote,
            use_cache: true,
            force_refresh: false,
            events,
            on_complete: None,
        }
    }

    /// Request a load from the bundled resource store.
    pub fn bundled(path: impl Into<String>, events: EventSender<T>) -> Self {
        Self {
            path: path.into(),
            source: SourceKind::Bundled,
            use_cache: true,
            force_refresh: false,
            events,
            on_complete: None,
        }
    }

    /// Disable cache reads and writes for this request.
    pub fn no_cache(mut self) -> Self {
        self.use_cache = false;
        self.force_refresh = false;
        self
    }

    /// Bypass the cache read but refresh the cache on success.
    pub fn force_refresh(mut self) -> Self {
        self.force_refresh = true;
        self
    }

    /// Attach a completion callback, invoked with the decoded result right
    /// after the `DataLoaded` event. Allows chaining dependent requests.
    pub fn on_complete(mut self, callback: impl FnOnce(Arc<T>) + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events;

    #[test]
    fn test_remote_defaults() {
        let (tx, _rx) = events::channel::<()>();
        let req = LoadRequest::remote("https://example.com/config.json", tx);
        assert_eq!(req.source, SourceKind::Remote);
        assert!(req.use_cache);
        assert!(!req.force_refresh);
        assert!(req.on_complete.is_none());
    }

    #[test]
    fn test_no_cache_clears_both_flags() {
        let (tx, _rx) = events::channel::<()>();
        let req = LoadRequest::remote("https://example.com/config.json", tx)
            .force_refresh()
            .no_cache();
        assert!(!req.use_cache);
        assert!(!req.force_refresh);
    }
}
