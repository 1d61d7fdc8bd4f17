//! Submission Error Types
//!
//! This module provides submission-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Submission-specific result type alias
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Submission-specific error variants
///
/// These are domain-specific errors that map to appropriate HTTP status codes
/// and can be converted to `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// A required text field or the image list is empty
    #[error("All fields are required including images.")]
    MissingFields,

    /// More image files than the configured maximum
    #[error("A submission accepts at most {max} images.")]
    TooManyImages { max: usize },

    /// Malformed multipart payload
    #[error("Invalid multipart payload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Unknown submission id
    #[error("Submission not found.")]
    NotFound,

    /// The persisted store exists but is not valid JSON
    #[error("Submission store is corrupted: {0}")]
    CorruptStore(#[source] serde_json::Error),

    /// The store could not be serialized
    #[error("Failed to serialize submission store: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Filesystem error from the store or the upload directory
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SubmissionError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::MissingFields
            | SubmissionError::TooManyImages { .. }
            | SubmissionError::Multipart(_) => StatusCode::BAD_REQUEST,
            SubmissionError::NotFound => StatusCode::NOT_FOUND,
            SubmissionError::CorruptStore(_)
            | SubmissionError::Serialize(_)
            | SubmissionError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::MissingFields
            | SubmissionError::TooManyImages { .. }
            | SubmissionError::Multipart(_) => ErrorKind::BadRequest,
            SubmissionError::NotFound => ErrorKind::NotFound,
            SubmissionError::CorruptStore(_)
            | SubmissionError::Serialize(_)
            | SubmissionError::Io(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SubmissionError::CorruptStore(e) => {
                tracing::error!(error = %e, "Submission store is corrupted");
            }
            SubmissionError::Serialize(e) => {
                tracing::error!(error = %e, "Submission store serialization failed");
            }
            SubmissionError::Io(e) => {
                tracing::error!(error = %e, "Submission storage I/O error");
            }
            SubmissionError::Multipart(e) => {
                tracing::warn!(error = %e, "Rejected multipart payload");
            }
            _ => {
                tracing::debug!(error = %self, "Submission request rejected");
            }
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Client errors carry their message; server errors never leak detail.
        let message = if status.is_server_error() {
            "Internal server error.".to_string()
        } else {
            self.to_string()
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
