use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::ingest::decode::DecodeError;

// ============================================================================
// API error mapping — client mistakes are 4xx, server faults are 5xx
// ============================================================================

/// Errors surfaced to HTTP callers.
///
/// Upload and decode failures are client-caused and map to 400; only
/// internal faults map to 500. Bodies are plain text so the upload page can
/// display them inline.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed multipart body, missing `file` field, non-UTF-8 upload.
    #[error("upload error: {0}")]
    Upload(String),

    /// The uploaded document failed ingestion (empty, bad JSON, wrong shape).
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Unexpected server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Upload(_) | ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
