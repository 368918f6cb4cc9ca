use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LoadError;

/// Derive the cache entry name for a request path: its final segment.
/// Returns `None` when the path has no usable file name (empty path or a
/// trailing slash).
pub fn file_name_for(path: &str) -> Option<&str> {
    let trimmed = path.split(['?', '#']).next().unwrap_or(path);
    let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Filesystem-backed store for the last successfully fetched bytes per
/// file name. One flat directory, one file per entry, no expiry.
///
/// There is intentionally no locking: concurrent writers to the same file
/// name race and the last writer wins.
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: PathBuf) -> Result<Self, LoadError> {
        std::fs::create_dir_all(&root).map_err(|e| LoadError::CacheWrite {
            name: root.display().to_string(),
            source: e,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// True iff a cache entry with that name is present.
    pub fn exists(&self, name: &str) -> bool {
        self.entry_path(name).exists()
    }

    /// Read the raw bytes of an entry. Fails if the entry is absent or
    /// unreadable; callers either check `exists` first or handle the error.
    pub fn read(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        std::fs::read(self.entry_path(name)).map_err(|e| LoadError::CacheRead {
            name: name.to_string(),
            source: e,
        })
    }

    /// Write an entry, unconditionally replacing any previous content for
    /// that name.
    pub fn write(&self, name: &str, bytes: &[u8]) -> Result<(), LoadError> {
        std::fs::write(self.entry_path(name), bytes).map_err(|e| LoadError::CacheWrite {
            name: name.to_string(),
            source: e,
        })?;
        debug!(name, len = bytes.len(), "Cache entry written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, CacheStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = CacheStore::new(dir.path().join("cache")).expect("Failed to open store");
        (dir, store)
    }

    #[test]
    fn test_file_name_for_url() {
        assert_eq!(
            file_name_for("https://example.com/data/config.json"),
            Some("config.json")
        );
    }

    #[test]
    fn test_file_name_for_bare_name() {
        assert_eq!(file_name_for("config.json"), Some("config.json"));
    }

    #[test]
    fn test_file_name_for_ignores_query_string() {
        assert_eq!(
            file_name_for("https://example.com/config.json?v=2"),
            Some("config.json")
        );
    }

    #[test]
    fn test_file_name_for_rejects_empty() {
        assert_eq!(file_name_for(""), None);
        assert_eq!(file_name_for("https://example.com/"), None);
    }

    #[test]
    fn test_exists_read_write() {
        let (_dir, store) = store();
        assert!(!store.exists("config.json"));
        assert!(store.read("config.json").is_err());

        store.write("config.json", br#"{"a":1}"#).unwrap();
        assert!(store.exists("config.json"));
        assert_eq!(store.read("config.json").unwrap(), br#"{"a":1}"#);
    }

    #[test]
    fn test_write_overwrites_existing_entry() {
        let (_dir, store) = store();
        store.write("config.json", br#"{"a":1}"#).unwrap();
        store.write("config.json", br#"{"a":2}"#).unwrap();
        assert_eq!(store.read("config.json").unwrap(), br#"{"a":2}"#);
    }

    #[test]
    fn test_read_error_names_entry() {
        let (_dir, store) = store();
        let err = store.read("missing.json").unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
