mod settings;

use std::sync::Arc;

use anyhow::{Context, Result};
use vidup_axum::VideoApp;
use vidup_core::VideoCoordinator;

pub use settings::{load_config, ServerSettings};

pub async fn build(settings: &ServerSettings) -> Result<VideoApp> {
    let store = settings
        .store
        .open()
        .await
        .with_context(|| format!("failed to open byte store {:?}", settings.store))?;
    let capabilities = store.capabilities();
    tracing::info!(backend = capabilities.backend, durable = capabilities.durable, "byte store ready");
    if !capabilities.durable {
        tracing::warn!(backend = capabilities.backend, "video data will be lost on restart");
    }

    let coordinator = Arc::new(VideoCoordinator::new(store));

    let ax = VideoApp::new(coordinator, settings.fallback_origin())
        .service("/health", || async { "ok" })
        .with_body_limit(settings.upload_max_bytes)
        .with_observability();

    Ok(ax)
}
