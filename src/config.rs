//! Library configuration management.
//!
//! Holds the persistent cache location. Configuration is stored as JSON at
//! `~/.config/fetchcache/config.json`; the cache root defaults to a
//! directory under the platform cache dir and can be overridden.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "fetchcache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Overrides the platform default cache directory when set.
    pub cache_root: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Root directory for cache entries.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(ref root) = self.cache_root {
            return Ok(root.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_honors_override() {
        let config = Config {
            cache_root: Some(PathBuf::from("/tmp/fetchcache-test")),
        };
        assert_eq!(
            config.cache_dir().unwrap(),
            PathBuf::from("/tmp/fetchcache-test")
        );
    }

    #[test]
    fn test_default_has_no_override() {
        assert!(Config::default().cache_root.is_none());
    }
}
