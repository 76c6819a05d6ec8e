use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;

use crate::{
    BlobError, BlobResult, ByteStore, ByteStream, DefaultKeyStrategy, KeyStrategy,
    StoreCapabilities,
};

/// Filesystem byte store: one file per video under a root directory
pub struct FsByteStore {
    root: PathBuf,
    keys: Arc<dyn KeyStrategy>,
}

impl FsByteStore {
    /// Create a store rooted at `root`. The directory is created on first save.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            keys: Arc::new(DefaultKeyStrategy),
        }
    }

    /// Create with custom key strategy
    pub fn with_key_strategy<P: Into<PathBuf>, K: KeyStrategy + 'static>(root: P, keys: K) -> Self {
        Self {
            root: root.into(),
            keys: Arc::new(keys),
        }
    }

    fn path_for(&self, id: u64) -> PathBuf {
        self.root.join(self.keys.object_key(id))
    }
}

#[async_trait]
impl ByteStore for FsByteStore {
    async fn save(&self, id: u64, mut body: ByteStream<'_>) -> BlobResult<u64> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.path_for(id);
        let mut file = File::create(&path).await?;
        let mut written = 0u64;
        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        file.sync_all().await?;

        tracing::debug!(video_id = id, path = %path.display(), bytes = written, "wrote video payload");
        Ok(written)
    }

    async fn open(&self, id: u64) -> BlobResult<ByteStream<'static>> {
        match File::open(self.path_for(id)).await {
            Ok(file) => Ok(Box::pin(ReaderStream::new(file))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(BlobError::not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, id: u64) -> BlobResult<bool> {
        Ok(tokio::fs::try_exists(self.path_for(id)).await?)
    }

    fn capabilities(&self) -> StoreCapabilities {
        StoreCapabilities::durable("fs")
    }
}
