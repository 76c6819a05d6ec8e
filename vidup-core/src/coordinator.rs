use std::sync::Arc;

use futures_util::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};
use vidup_blob::{ByteStore, ByteStream, StoreCapabilities};

use crate::{IdAllocator, Origin, Video, VideoError, VideoRegistry, VideoResult, VideoStatus};

/// Orchestrates video registration and payload transfer.
///
/// Metadata must be registered before bytes move in either direction: both
/// transfer paths look the id up first and fail with
/// [`VideoError::NotFound`] without touching the byte store when it is
/// missing. Byte store failures surface as [`VideoError::Storage`]; nothing
/// is retried here.
pub struct VideoCoordinator {
    registry: VideoRegistry,
    ids: IdAllocator,
    store: Arc<dyn ByteStore>,
}

impl VideoCoordinator {
    pub fn new(store: Arc<dyn ByteStore>) -> Self {
        Self {
            registry: VideoRegistry::new(),
            ids: IdAllocator::new(),
            store,
        }
    }

    /// Assign an id (when `video.id == 0`), compute the data URL for
    /// `origin`, and store the record. Re-registering an existing id
    /// replaces its metadata.
    pub fn register(&self, mut video: Video, origin: &Origin) -> Video {
        if video.has_id() {
            if !self.ids.observe(video.id) {
                debug!(video_id = video.id, "caller id is outside the allocated range");
            }
        } else {
            video.id = self.ids.next();
        }
        video.data_url = Some(origin.data_url(video.id));

        if self.registry.insert(video.clone()).is_some() {
            warn!(video_id = video.id, "replaced metadata of an existing video");
        }
        info!(video_id = video.id, title = %video.title, data_url = ?video.data_url, "registered video");
        video
    }

    pub fn list(&self) -> Vec<Video> {
        self.registry.list()
    }

    pub fn get(&self, id: u64) -> Option<Video> {
        self.registry.get(id)
    }

    fn require(&self, id: u64) -> VideoResult<Video> {
        self.registry.get(id).ok_or_else(|| {
            debug!(video_id = id, "video is not registered");
            VideoError::not_found(id)
        })
    }

    /// Save `body` as the payload of video `id`.
    ///
    /// The stream is not polled unless `id` is registered.
    pub async fn upload_data(&self, id: u64, body: ByteStream<'_>) -> VideoResult<VideoStatus> {
        self.require(id)?;

        match self.store.save(id, body).await {
            Ok(bytes) => {
                info!(video_id = id, bytes, "stored video data");
                Ok(VideoStatus::ready())
            }
            Err(e) => {
                error!(video_id = id, error = %e, "failed to store video data");
                Err(VideoError::storage(id, e))
            }
        }
    }

    /// Open the payload of video `id` as a stream, together with its metadata.
    ///
    /// Errors raised while the returned stream is consumed are the
    /// consumer's to report.
    pub async fn open_data(&self, id: u64) -> VideoResult<(Video, ByteStream<'static>)> {
        let video = self.require(id)?;

        match self.store.open(id).await {
            Ok(stream) => Ok((video, stream)),
            Err(e) => {
                error!(video_id = id, error = %e, "failed to open video data");
                Err(VideoError::storage(id, e))
            }
        }
    }

    /// Copy the payload of video `id` into `sink` and flush it.
    ///
    /// Returns the number of bytes written. Nothing is written when `id` is
    /// not registered.
    pub async fn download_data<W>(&self, id: u64, sink: &mut W) -> VideoResult<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let (_, mut stream) = self.open_data(id).await?;

        let mut written = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| self.copy_failed(id, e))?;
            sink.write_all(&chunk).await.map_err(|e| self.copy_failed(id, e))?;
            written += chunk.len() as u64;
        }
        sink.flush().await.map_err(|e| self.copy_failed(id, e))?;

        info!(video_id = id, bytes = written, "served video data");
        Ok(written)
    }

    fn copy_failed(&self, id: u64, e: std::io::Error) -> VideoError {
        error!(video_id = id, error = %e, "failed to copy video data");
        VideoError::storage(id, e)
    }

    /// Whether the byte store holds a payload for registered video `id`
    pub async fn has_data(&self, id: u64) -> VideoResult<bool> {
        self.require(id)?;
        self.store.exists(id).await.map_err(|e| VideoError::storage(id, e))
    }

    pub fn store_capabilities(&self) -> StoreCapabilities {
        self.store.capabilities()
    }
}
