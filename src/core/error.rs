//! Typed error handling for the catalog API.
//!
//! Handlers return [`ApiError`] and let axum turn it into an HTTP
//! response with a structured JSON body. Only two failure categories are
//! surfaced to callers: a missing single resource (404) and a storage
//! failure (500). PATCH and DELETE against a missing id are deliberately
//! not errors; they report success per the original contract.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Error type returned by every handler
#[derive(Debug, Error)]
pub enum ApiError {
    /// Single-resource lookup against an id that does not exist
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i32 },

    /// Storage backend failure (lock poisoning, backend I/O, ...)
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        ApiError::NotFound { resource, id }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(err) = &self {
            tracing::error!(error = %err, "storage failure");
        }

        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
