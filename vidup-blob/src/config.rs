use std::path::PathBuf;
use std::sync::Arc;

use crate::{BlobError, BlobResult, ByteStore, FsByteStore, MemoryByteStore};

/// Which byte store backend to build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Volatile, process-local storage
    Memory,
    /// One file per video under `root`
    Fs { root: PathBuf },
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::Fs {
            root: PathBuf::from("videos"),
        }
    }
}

impl StoreConfig {
    /// Parse a backend name (`memory` or `fs`) plus the fs root directory
    pub fn from_parts(backend: &str, dir: &str) -> BlobResult<Self> {
        match backend.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "fs" | "file" | "filesystem" => Ok(Self::Fs {
                root: PathBuf::from(dir),
            }),
            other => Err(BlobError::invalid(format!(
                "unknown storage backend '{}' (expected 'fs' or 'memory')",
                other
            ))),
        }
    }

    /// Build the configured store
    pub async fn open(&self) -> BlobResult<Arc<dyn ByteStore>> {
        match self {
            Self::Memory => Ok(Arc::new(MemoryByteStore::new())),
            Self::Fs { root } => {
                tokio::fs::create_dir_all(root).await?;
                Ok(Arc::new(FsByteStore::new(root.clone())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreCapabilities;

    #[test]
    fn parses_known_backends() {
        assert_eq!(StoreConfig::from_parts("memory", "ignored").unwrap(), StoreConfig::Memory);
        assert_eq!(
            StoreConfig::from_parts("FS", "/tmp/v").unwrap(),
            StoreConfig::Fs { root: PathBuf::from("/tmp/v") }
        );
    }

    #[test]
    fn rejects_unknown_backend() {
        let err = StoreConfig::from_parts("s3", "x").unwrap_err();
        assert!(matches!(err, BlobError::Invalid { .. }));
    }

    #[tokio::test]
    async fn open_fs_creates_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested/videos");
        let store = StoreConfig::Fs { root: root.clone() }.open().await.unwrap();

        assert!(root.is_dir());
        assert_eq!(store.capabilities(), StoreCapabilities::durable("fs"));
    }

    #[tokio::test]
    async fn memory_backend_is_not_durable() {
        let store = StoreConfig::Memory.open().await.unwrap();
        assert!(!store.capabilities().durable);
    }
}
