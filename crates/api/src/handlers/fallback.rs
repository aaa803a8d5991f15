use axum::http::Uri;

use crate::error::AppError;

/// Unmatched routes answer with a `fail` envelope rather than an empty 404.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("route {}", uri.path()))
}
