use async_trait::async_trait;

use crate::{BlobResult, ByteStream};

/// Byte storage for video payloads, addressed by video id.
///
/// Stores know nothing about video metadata. Whether an id is registered is
/// the caller's concern; a store only answers for the bytes it holds.
#[async_trait]
pub trait ByteStore: Send + Sync {
    /// Persist the whole stream under `id`, replacing anything stored before.
    ///
    /// Returns the number of bytes written. If the stream or the backend
    /// fails part way, the bytes stored for `id` are unspecified.
    async fn save(&self, id: u64, body: ByteStream<'_>) -> BlobResult<u64>;

    /// Open the bytes stored under `id` for reading
    async fn open(&self, id: u64) -> BlobResult<ByteStream<'static>>;

    /// Whether any bytes are stored under `id`
    async fn exists(&self, id: u64) -> BlobResult<bool>;

    /// Get store capabilities
    fn capabilities(&self) -> StoreCapabilities;
}

/// Store capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCapabilities {
    pub backend: &'static str,
    pub durable: bool,
}

impl StoreCapabilities {
    pub fn volatile(backend: &'static str) -> Self {
        Self {
            backend,
            durable: false,
        }
    }

    pub fn durable(backend: &'static str) -> Self {
        Self {
            backend,
            durable: true,
        }
    }
}

/// Strategy for naming stored payloads
pub trait KeyStrategy: Send + Sync {
    /// Object key (file name for the filesystem backend) for a video id
    fn object_key(&self, id: u64) -> String;
}

/// Default key strategy: `video{id}.mpg`
#[derive(Debug, Clone, Default)]
pub struct DefaultKeyStrategy;

impl KeyStrategy for DefaultKeyStrategy {
    fn object_key(&self, id: u64) -> String {
        format!("video{}.mpg", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_are_per_video() {
        let keys = DefaultKeyStrategy;
        assert_eq!(keys.object_key(2), "video2.mpg");
        assert_ne!(keys.object_key(2), keys.object_key(3));
    }
}
