//! Completion events for load requests.
//!
//! Every request carries a typed sender owned by the caller; the engine and
//! the bundled path emit exactly one `LoadEvent` per request through it.
//! The channel is unbounded so emission never suspends; the network fetch
//! stays the only suspension point in the pipeline.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::error;

/// Terminal signal for a single load request. Exactly one variant fires
/// per request, exactly once.
#[derive(Debug)]
pub enum LoadEvent<T> {
    /// The decoded result, shared with the optional completion callback.
    DataLoaded(Arc<T>),
    /// Human-readable failure message.
    RequestLoadDataError(String),
}

pub type EventSender<T> = mpsc::UnboundedSender<LoadEvent<T>>;
pub type EventReceiver<T> = mpsc::UnboundedReceiver<LoadEvent<T>>;

/// Create a completion channel for load requests.
pub fn channel<T>() -> (EventSender<T>, EventReceiver<T>) {
    mpsc::unbounded_channel()
}

/// Send an event, logging instead of failing if the receiver is gone.
/// A dropped receiver means the caller stopped listening; the request
/// still ran to its terminal state.
pub(crate) fn emit<T>(tx: &EventSender<T>, event: LoadEvent<T>) {
    if tx.send(event).is_err() {
        error!("Failed to deliver load event - receiver dropped");
    }
}
