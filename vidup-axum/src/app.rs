use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::handler::Handler;
use axum::http::{HeaderName, Request};
use axum::routing::get;
use axum::Router;
use tokio::net::{TcpListener, ToSocketAddrs};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use vidup_core::{Origin, VideoCoordinator};

use crate::rest;
use crate::VidAxumState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Router plus the coordinator behind it.
///
/// Layers added through `with_*` wrap the routes registered so far, so call
/// them after the last `service`.
pub struct VideoApp {
    pub coordinator: Arc<VideoCoordinator>,
    pub router: Router<()>,
}

impl Clone for VideoApp {
    fn clone(&self) -> Self {
        Self {
            coordinator: Arc::clone(&self.coordinator),
            router: self.router.clone(),
        }
    }
}

impl VideoApp {
    pub fn new(coordinator: Arc<VideoCoordinator>, fallback_origin: Origin) -> Self {
        let state = VidAxumState::new(Arc::clone(&coordinator), fallback_origin);
        Self {
            coordinator,
            router: rest::video_router(state),
        }
    }

    pub fn service<H, T>(mut self, path: &str, handler: H) -> Self
    where
        H: Handler<T, ()> + Clone + Send + 'static,
        T: 'static,
    {
        self.router = self.router.route(path, get(handler));
        self
    }

    /// Cap request bodies (uploads) at `bytes`
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.router = self.router.layer(DefaultBodyLimit::max(bytes));
        self
    }

    /// Request ids (`x-request-id`, generated when absent) and per-request trace spans
    pub fn with_observability(mut self) -> Self {
        let header = HeaderName::from_static(REQUEST_ID_HEADER);
        self.router = self
            .router
            .layer(PropagateRequestIdLayer::new(header.clone()))
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
                let request_id = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %request_id,
                )
            }))
            .layer(SetRequestIdLayer::new(header, MakeRequestUuid));
        self
    }

    pub async fn listen<A>(self, addr: A) -> anyhow::Result<()>
    where
        A: ToSocketAddrs,
    {
        let listener = TcpListener::bind(addr).await?;
        let local = listener.local_addr()?;
        tracing::info!(
            addr = %local,
            backend = self.coordinator.store_capabilities().backend,
            "listening"
        );
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
