use std::sync::Arc;

use vidup_core::{Origin, VideoCoordinator};

pub struct VidAxumState {
    pub coordinator: Arc<VideoCoordinator>,
    /// Used when a request carries neither an absolute URI nor a `Host` header
    pub fallback_origin: Arc<Origin>,
}

impl Clone for VidAxumState {
    fn clone(&self) -> Self {
        Self {
            coordinator: Arc::clone(&self.coordinator),
            fallback_origin: Arc::clone(&self.fallback_origin),
        }
    }
}

impl VidAxumState {
    pub fn new(coordinator: Arc<VideoCoordinator>, fallback_origin: Origin) -> Self {
        Self {
            coordinator,
            fallback_origin: Arc::new(fallback_origin),
        }
    }
}
