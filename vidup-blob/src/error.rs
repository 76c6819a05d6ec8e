use thiserror::Error;

/// Result type for byte store operations
pub type BlobResult<T> = Result<T, BlobError>;

/// Errors raised by byte store backends
#[derive(Error, Debug)]
pub enum BlobError {
    #[error("No stored data for video {id}")]
    NotFound { id: u64 },

    #[error("Invalid store configuration: {message}")]
    Invalid { message: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl BlobError {
    /// Create an invalid configuration error
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
