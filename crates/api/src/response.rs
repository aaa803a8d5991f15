//! axum responders that render JSend envelopes.
//!
//! Handlers either return a [`JsendResponse`] built from a typed payload, or
//! drive a [`JsendWriter`](jsend_core::JsendWriter) / the direct encoders into a
//! [`ResponseRecorder`] and return it wrapped in [`Recorded`].

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsend_core::{codec, JsendResult, ResponseRecorder};
use serde::Serialize;

/// Message sent in place of a body that could not be encoded.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// A JSend response with an explicit status code.
///
/// # Example
///
/// ```ignore
/// async fn show() -> JsendResponse<User> {
///     JsendResponse::success(user)
/// }
/// ```
#[derive(Debug, Clone)]
pub enum JsendResponse<T> {
    /// `{"status":"success","data":..}`, `200 OK` unless overridden.
    Success { code: StatusCode, data: T },
    /// `{"status":"fail","data":..}`, `400 Bad Request` unless overridden.
    Fail { code: StatusCode, data: T },
    /// `{"status":"error","message":..}`, `500 Internal Server Error` unless overridden.
    Error { code: StatusCode, message: String },
}

impl<T> JsendResponse<T> {
    pub fn success(data: T) -> Self {
        Self::Success {
            code: StatusCode::OK,
            data,
        }
    }

    pub fn fail(data: T) -> Self {
        Self::Fail {
            code: StatusCode::BAD_REQUEST,
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Replace the HTTP status code. The envelope status is unchanged.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        match &mut self {
            Self::Success { code, .. } | Self::Fail { code, .. } | Self::Error { code, .. } => {
                *code = status;
            }
        }
        self
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success { code, .. } | Self::Fail { code, .. } | Self::Error { code, .. } => {
                *code
            }
        }
    }
}

impl<T: Serialize> JsendResponse<T> {
    fn render(&self, recorder: &mut ResponseRecorder) -> JsendResult<usize> {
        match self {
            Self::Success { code, data } => codec::success(recorder, data, *code),
            Self::Fail { code, data } => codec::fail(recorder, data, *code),
            Self::Error { code, message } => codec::error(recorder, message, *code),
        }
    }
}

impl<T: Serialize> IntoResponse for JsendResponse<T> {
    fn into_response(self) -> Response {
        let mut recorder = ResponseRecorder::new();
        match self.render(&mut recorder) {
            Ok(_) => Recorded(recorder).into_response(),
            Err(err) => {
                tracing::error!(error = %err, status = %self.status_code(), "Failed to encode JSend response");
                internal_error()
            }
        }
    }
}

/// Turns a filled [`ResponseRecorder`] into an axum response as recorded.
#[derive(Debug)]
pub struct Recorded(pub ResponseRecorder);

impl IntoResponse for Recorded {
    fn into_response(self) -> Response {
        let (status, headers, body) = self.0.into_parts();
        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

/// A `500` error envelope with a sanitized message.
pub(crate) fn internal_error() -> Response {
    let mut recorder = ResponseRecorder::new();
    match codec::error(
        &mut recorder,
        INTERNAL_ERROR_MESSAGE,
        StatusCode::INTERNAL_SERVER_ERROR,
    ) {
        Ok(_) => Recorded(recorder).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
