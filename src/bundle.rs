//! Bundled resource store.
//!
//! Keyed registry for data shipped with the application. Lookups are
//! synchronous and never touch the cache or the network. Keys are stored
//! without a `.json` extension; lookups strip one if present, so
//! `"defaults.json"` and `"defaults"` resolve to the same entry.

use std::collections::HashMap;

/// In-process registry of bundled resources, populated at startup.
#[derive(Default)]
pub struct BundleStore {
    entries: HashMap<String, Vec<u8>>,
}

impl BundleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundled resource under `key` (extension-stripped).
    pub fn insert(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(strip_json_ext(&key.into()), bytes.into());
    }

    /// Look up a bundled resource, or `None` if nothing is registered for
    /// the path.
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(&strip_json_ext(path)).map(Vec::as_slice)
    }
}

fn strip_json_ext(path: &str) -> String {
    path.strip_suffix(".json").unwrap_or(path).to_string()
}
