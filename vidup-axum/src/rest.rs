use axum::{
    body::Body,
    extract::multipart::MultipartRejection,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Multipart, OriginalUri, Path, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use futures_util::StreamExt;
use vidup_blob::ByteStream;
use vidup_core::{Video, VideoError, VideoStatus};

use crate::{origin::request_origin, VidAxumError, VidAxumState};

/// Multipart field carrying the video payload
pub const DATA_FIELD: &str = "data";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

fn map_json_rejection(rejection: JsonRejection) -> VidAxumError {
    VideoError::bad_request(format!(
        "Failed to parse the request body as JSON: {}",
        rejection.body_text()
    ))
    .into()
}

fn map_path_rejection(rejection: PathRejection) -> VidAxumError {
    VideoError::bad_request(format!("Invalid video id: {}", rejection.body_text())).into()
}

fn map_multipart_rejection(rejection: MultipartRejection) -> VidAxumError {
    VideoError::bad_request(format!(
        "Expected a multipart/form-data body: {}",
        rejection.body_text()
    ))
    .into()
}

/// Routes for `/video` and `/video/{id}/data`
pub fn video_router(state: VidAxumState) -> Router<()> {
    Router::new()
        .route("/video", routing::get(list_videos).post(register_video))
        .route("/video/{id}/data", routing::get(download_data).post(upload_data))
        .with_state(state)
}

async fn list_videos(State(state): State<VidAxumState>) -> Json<Vec<Video>> {
    Json(state.coordinator.list())
}

async fn register_video(
    State(state): State<VidAxumState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    data: Result<Json<Video>, JsonRejection>,
) -> Result<Json<Video>, VidAxumError> {
    let Json(video) = data.map_err(map_json_rejection)?;

    let origin = request_origin(&headers, &uri, &state.fallback_origin);
    Ok(Json(state.coordinator.register(video, &origin)))
}

async fn upload_data(
    State(state): State<VidAxumState>,
    id: Result<Path<u64>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<VideoStatus>, VidAxumError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    if state.coordinator.get(id).is_none() {
        return Err(VideoError::not_found(id).into());
    }
    let mut multipart = multipart.map_err(map_multipart_rejection)?;

    // Skip fields until `data`; its bytes are only pulled by the store.
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| VideoError::bad_request(format!("Failed to read multipart body: {}", e)))?
    {
        if field.name() != Some(DATA_FIELD) {
            continue;
        }

        let body: ByteStream<'_> = Box::pin(field.map(|chunk| chunk.map_err(std::io::Error::other)));
        let status = state.coordinator.upload_data(id, body).await?;
        return Ok(Json(status));
    }

    Err(VideoError::bad_request(format!("Missing multipart field `{}`", DATA_FIELD)).into())
}

async fn download_data(
    State(state): State<VidAxumState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Response, VidAxumError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    let (video, stream) = state.coordinator.open_data(id).await?;

    let content_type = video
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    Ok(([(header::CONTENT_TYPE, content_type)], Body::from_stream(stream)).into_response())
}
