use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use vidup_core::VideoError;

#[derive(Debug)]
pub struct VidAxumError(pub anyhow::Error);

impl From<anyhow::Error> for VidAxumError {
    fn from(e: anyhow::Error) -> Self {
        Self(e)
    }
}

impl From<VideoError> for VidAxumError {
    fn from(e: VideoError) -> Self {
        Self(anyhow::Error::new(e))
    }
}

impl IntoResponse for VidAxumError {
    fn into_response(self) -> Response {
        // A VideoError anywhere in the chain decides status and body
        if let Some(err) = self.0.chain().find_map(|e| e.downcast_ref::<VideoError>()) {
            let status =
                StatusCode::from_u16(err.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, Json(err.to_json())).into_response();
        }

        tracing::error!(error = %self.0, "unhandled error");
        let body = serde_json::json!({
            "name": "GeneralError",
            "message": "Internal server error",
            "code": 500,
            "className": "general-error",
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
