//! Extractors whose rejections render as JSend envelopes.

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// [`axum::extract::Path`] that rejects with an [`AppError`] instead of a
/// plain-text body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
