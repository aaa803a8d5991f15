use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsend_core::JsendError;
use serde_json::json;

use crate::response::{internal_error, JsendResponse};

/// Application-level error type for HTTP handlers.
///
/// Client errors render as `fail` envelopes carrying `{"code", "message"}`
/// data; server errors render as `error` envelopes with a sanitized message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Shaping the response body failed.
    #[error(transparent)]
    Jsend(#[from] JsendError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Jsend(err) => {
                tracing::error!(error = %err, "Response encoding error");
                return internal_error();
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                return internal_error();
            }
        };

        JsendResponse::fail(json!({
            "code": code,
            "message": message,
        }))
        .with_status(status)
        .into_response()
    }
}
