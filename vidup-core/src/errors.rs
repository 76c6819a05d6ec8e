//! # Errors
//!
//! Every failure a caller can observe from the coordinator is one of three
//! kinds, each with its own status code and Feathers-style class name:
//!
//! - `NotFound` (404): the id was never registered
//! - `GeneralError` (500): the byte store failed
//! - `BadRequest` (400): the transport could not decode the request
//!
//! Registry and allocator operations have no error path.

use thiserror::Error;
use vidup_blob::BlobError;

/// A convenience result type for coordinator operations.
pub type VideoResult<T> = std::result::Result<T, VideoError>;

/// Error class names + status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,   // 400
    NotFound,     // 404
    GeneralError, // 500
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::GeneralError => 500,
        }
    }

    /// Error `name` (e.g. "NotFound")
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::GeneralError => "GeneralError",
        }
    }

    /// Error `className` (kebab-cased)
    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad-request",
            ErrorKind::NotFound => "not-found",
            ErrorKind::GeneralError => "general-error",
        }
    }
}

#[derive(Error, Debug)]
pub enum VideoError {
    #[error("Video {id} not found")]
    NotFound { id: u64 },

    #[error("Storage failure for video {id}: {source}")]
    Storage {
        id: u64,
        #[source]
        source: BlobError,
    },

    #[error("{message}")]
    BadRequest { message: String },
}

impl VideoError {
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    pub fn storage<E: Into<BlobError>>(id: u64, source: E) -> Self {
        Self::Storage {
            id,
            source: source.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            VideoError::NotFound { .. } => ErrorKind::NotFound,
            VideoError::Storage { .. } => ErrorKind::GeneralError,
            VideoError::BadRequest { .. } => ErrorKind::BadRequest,
        }
    }

    pub fn code(&self) -> u16 {
        self.kind().status_code()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, VideoError::NotFound { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, VideoError::Storage { .. })
    }

    /// Message safe to return to clients: storage failures drop the
    /// backend's error text (paths, OS messages).
    pub fn client_message(&self) -> String {
        match self {
            VideoError::Storage { id, .. } => format!("Storage failure for video {}", id),
            other => other.to_string(),
        }
    }

    /// JSON error payload.
    pub fn to_json(&self) -> serde_json::Value {
        let kind = self.kind();
        serde_json::json!({
            "name": kind.name(),
            "message": self.client_message(),
            "code": kind.status_code(),
            "className": kind.class_name(),
        })
    }
}
