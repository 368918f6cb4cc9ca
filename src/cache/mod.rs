//! Local caching module for offline data access.
//!
//! This module provides the `CacheStore` for keeping the raw bytes of the
//! last successful fetch per file name. Entries live flat under a single
//! root directory and are named by the final segment of the request path.
//! There is no expiry: presence alone signals validity. An entry survives
//! process restarts until it is overwritten.

pub mod store;

pub use store::{file_name_for, CacheStore};
