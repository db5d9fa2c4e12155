//! Server Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the dashboard server from starting or running
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configured dashboard directory is missing or not a directory
    #[error("Dashboard directory not found: {0:?}")]
    MissingHttpDir(PathBuf),

    /// IO error (bind, accept)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

/// Plain-text error bodies, matching what the broker's own listener sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainError {
    NotFound,
    MethodNotAllowed,
}

impl IntoResponse for PlainError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            PlainError::NotFound => (StatusCode::NOT_FOUND, "Not found.\n"),
            PlainError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Invalid HTTP Method\n")
            }
        };

        tracing::debug!(status = %status, "rejecting request");
        (status, body).into_response()
    }
}
