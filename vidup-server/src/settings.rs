use anyhow::{Context, Result};
use vidup_blob::StoreConfig;
use vidup_core::config::{keys, ENV_PREFIX};
use vidup_core::{Origin, VidConfig};

/// Defaults overridden by `VIDUP__*` environment variables
pub fn load_config() -> VidConfig {
    let mut config = VidConfig::with_defaults();
    let applied = config.load_env(ENV_PREFIX);
    tracing::debug!(applied, "loaded environment overrides");
    config
}

/// Typed server settings resolved from a [`VidConfig`]
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub upload_max_bytes: usize,
}

impl ServerSettings {
    pub fn from_config(config: &VidConfig) -> Result<Self> {
        let snapshot = config.snapshot();

        let host = snapshot
            .get_string(keys::HTTP_HOST)
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = snapshot
            .get_u16(keys::HTTP_PORT)
            .with_context(|| format!("`{}` must be a port number", keys::HTTP_PORT))?;
        let store = StoreConfig::from_parts(
            snapshot.get(keys::STORAGE_BACKEND).unwrap_or("fs"),
            snapshot.get(keys::STORAGE_DIR).unwrap_or("videos"),
        )?;
        let upload_max_bytes = snapshot
            .get_usize(keys::UPLOAD_MAX_BYTES)
            .with_context(|| format!("`{}` must be a byte count", keys::UPLOAD_MAX_BYTES))?;

        Ok(Self {
            host,
            port,
            store,
            upload_max_bytes,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Origin used for data URLs when a request carries no `Host`
    pub fn fallback_origin(&self) -> Origin {
        Origin::new(self.host.clone(), Some(self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_resolve() {
        let settings = ServerSettings::from_config(&VidConfig::with_defaults()).unwrap();

        assert_eq!(settings.listen_addr(), "127.0.0.1:8080");
        assert_eq!(settings.store, StoreConfig::Fs { root: PathBuf::from("videos") });
        assert_eq!(settings.upload_max_bytes, 500 * 1024 * 1024);
        assert_eq!(settings.fallback_origin().base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn bad_port_is_an_error() {
        let mut config = VidConfig::with_defaults();
        config.set(keys::HTTP_PORT, "http");

        let err = ServerSettings::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("http.port"));
    }

    #[test]
    fn unknown_backend_is_an_error() {
        let mut config = VidConfig::with_defaults();
        config.set(keys::STORAGE_BACKEND, "tape");

        assert!(ServerSettings::from_config(&config).is_err());
    }
}
