//! Server error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Store error.
    #[error(transparent)]
    Store(#[from] todo_store::StoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(error = %message, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
