use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::Video;

/// In-memory map from video id to metadata.
///
/// All access goes through one lock, so a reader either sees a record in
/// full or not at all. Nothing in here does I/O.
#[derive(Debug, Default)]
pub struct VideoRegistry {
    videos: RwLock<BTreeMap<u64, Video>>,
}

impl VideoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every registered video, ordered by id
    pub fn list(&self) -> Vec<Video> {
        self.videos.read().values().cloned().collect()
    }

    /// Store `video` under its id. Last write wins; the replaced record is returned.
    pub fn insert(&self, video: Video) -> Option<Video> {
        self.videos.write().insert(video.id, video)
    }

    pub fn get(&self, id: u64) -> Option<Video> {
        self.videos.read().get(&id).cloned()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.videos.read().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.videos.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.read().is_empty()
    }
}
