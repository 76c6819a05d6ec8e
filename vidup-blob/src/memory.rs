use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use parking_lot::RwLock;

use crate::{stream_bytes, BlobError, BlobResult, ByteStore, ByteStream, StoreCapabilities};

/// In-memory byte store for tests and development
#[derive(Clone, Default)]
pub struct MemoryByteStore {
    blobs: Arc<RwLock<HashMap<u64, Bytes>>>,
}

impl MemoryByteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ByteStore for MemoryByteStore {
    async fn save(&self, id: u64, mut body: ByteStream<'_>) -> BlobResult<u64> {
        // Buffer outside the lock; the map only ever sees complete payloads.
        let mut buf = BytesMut::new();
        while let Some(chunk) = body.next().await {
            buf.extend_from_slice(&chunk?);
        }

        let written = buf.len() as u64;
        self.blobs.write().insert(id, buf.freeze());
        Ok(written)
    }

    async fn open(&self, id: u64) -> BlobResult<ByteStream<'static>> {
        let data = self
            .blobs
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| BlobError::not_found(id))?;
        Ok(stream_bytes(data))
    }

    async fn exists(&self, id: u64) -> BlobResult<bool> {
        Ok(self.blobs.read().contains_key(&id))
    }

    fn capabilities(&self) -> StoreCapabilities {
        StoreCapabilities::volatile("memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream_chunks;

    async fn collect(mut stream: ByteStream<'static>) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(chunk) = stream.next().await {
            out.extend_from_slice(&chunk.unwrap());
        }
        out
    }

    #[tokio::test]
    async fn save_then_open_returns_all_chunks() {
        let store = MemoryByteStore::new();
        let chunks = vec![Bytes::from_static(b"abc"), Bytes::from_static(b"def")];

        let written = store.save(7, stream_chunks(chunks)).await.unwrap();
        assert_eq!(written, 6);

        let bytes = collect(store.open(7).await.unwrap()).await;
        assert_eq!(bytes, b"abcdef");
    }

    #[tokio::test]
    async fn save_replaces_previous_payload() {
        let store = MemoryByteStore::new();
        store.save(1, stream_bytes("first")).await.unwrap();
        store.save(1, stream_bytes("second")).await.unwrap();

        let bytes = collect(store.open(1).await.unwrap()).await;
        assert_eq!(bytes, b"second");
    }

    #[tokio::test]
    async fn open_missing_is_not_found() {
        let store = MemoryByteStore::new();
        let err = match store.open(42).await {
            Ok(_) => panic!("expected missing payload"),
            Err(e) => e,
        };
        assert!(err.is_not_found());
        assert!(!store.exists(42).await.unwrap());
    }

    #[tokio::test]
    async fn failed_stream_stores_nothing() {
        let store = MemoryByteStore::new();
        let body: ByteStream<'static> = Box::pin(futures_util::stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(std::io::Error::other("connection reset")),
        ]));

        assert!(matches!(store.save(3, body).await, Err(BlobError::Io { .. })));
        assert!(!store.exists(3).await.unwrap());
    }
}
