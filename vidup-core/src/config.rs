//! # Configuration
//!
//! A string key/value store. Defaults are set in code, then environment
//! variables with a prefix override them:
//!
//! ```rust
//! use vidup_core::VidConfig;
//!
//! let mut config = VidConfig::with_defaults();
//! config.set("http.port", "9000");
//!
//! let snapshot = config.snapshot();
//! assert_eq!(snapshot.get_u16("http.port"), Some(9000));
//! assert_eq!(snapshot.get("storage.backend"), Some("fs"));
//! ```
//!
//! `VIDUP__HTTP__PORT=9000` maps to `http.port` when loaded with
//! [`VidConfig::load_env`] and prefix `VIDUP__`.

use std::collections::HashMap;

/// Known configuration keys.
pub mod keys {
    pub const HTTP_HOST: &str = "http.host";
    pub const HTTP_PORT: &str = "http.port";
    pub const STORAGE_BACKEND: &str = "storage.backend";
    pub const STORAGE_DIR: &str = "storage.dir";
    pub const UPLOAD_MAX_BYTES: &str = "upload.max_bytes";
}

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "VIDUP__";

#[derive(Debug, Default, Clone)]
pub struct VidConfig {
    values: HashMap<String, String>,
}

impl VidConfig {
    /// Create an empty config store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Config with every known key set to its default.
    pub fn with_defaults() -> Self {
        let mut config = Self::new();
        config.set(keys::HTTP_HOST, "127.0.0.1");
        config.set(keys::HTTP_PORT, "8080");
        config.set(keys::STORAGE_BACKEND, "fs");
        config.set(keys::STORAGE_DIR, "videos");
        config.set(keys::UPLOAD_MAX_BYTES, (500u64 * 1024 * 1024).to_string());
        config
    }

    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Apply overrides from `vars`: `{prefix}HTTP__PORT` → `http.port`.
    ///
    /// Returns the number of keys applied.
    pub fn load_vars<I>(&mut self, prefix: &str, vars: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut applied = 0;
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                self.set(normalized, value);
                applied += 1;
            }
        }
        applied
    }

    /// Apply overrides from the process environment.
    pub fn load_env(&mut self, prefix: &str) -> usize {
        self.load_vars(prefix, std::env::vars())
    }

    pub fn snapshot(&self) -> VidConfigSnapshot {
        VidConfigSnapshot::new(self.values.clone())
    }
}

/// Read-only typed view of a [`VidConfig`].
#[derive(Debug, Clone, Default)]
pub struct VidConfigSnapshot {
    map: HashMap<String, String>,
}

impl VidConfigSnapshot {
    pub(crate) fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    pub fn get_u16(&self, key: &str) -> Option<u16> {
        self.get(key).and_then(|v| v.trim().parse::<u16>().ok())
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.trim().parse::<usize>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_vars_override_defaults() {
        let mut config = VidConfig::with_defaults();
        let applied = config.load_vars(
            ENV_PREFIX,
            vec![
                ("VIDUP__HTTP__PORT".to_string(), "9000".to_string()),
                ("VIDUP__STORAGE__BACKEND".to_string(), "memory".to_string()),
                ("HOME".to_string(), "/root".to_string()),
            ],
        );

        assert_eq!(applied, 2);
        let snapshot = config.snapshot();
        assert_eq!(snapshot.get_u16(keys::HTTP_PORT), Some(9000));
        assert_eq!(snapshot.get(keys::STORAGE_BACKEND), Some("memory"));
        assert!(!config.has("home"));
    }

    #[test]
    fn typed_getters_reject_garbage() {
        let mut config = VidConfig::new();
        config.set(keys::HTTP_PORT, "eighty");
        config.set(keys::UPLOAD_MAX_BYTES, "1024");

        let snapshot = config.snapshot();
        assert_eq!(snapshot.get_u16(keys::HTTP_PORT), None);
        assert_eq!(snapshot.get_usize(keys::UPLOAD_MAX_BYTES), Some(1024));
        config.set(keys::UPLOAD_MAX_BYTES, "-1");
        assert_eq!(config.snapshot().get_usize(keys::UPLOAD_MAX_BYTES), None);
    }
}
