//! The response sink abstraction and an in-memory recorder implementation.

use std::io;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, StatusCode};

/// Content type set on responses that do not already declare one.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Anything an HTTP response body can be written to.
///
/// This is the only surface the envelope codec and [`JsendWriter`] rely on:
/// a mutable header map, a status code setter, and a byte writer.
///
/// [`JsendWriter`]: crate::JsendWriter
pub trait ResponseSink {
    /// Response headers, still mutable until the body is written.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Set the response status code.
    fn set_status(&mut self, code: StatusCode);

    /// Write body bytes, returning how many were accepted.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        (**self).headers_mut()
    }

    fn set_status(&mut self, code: StatusCode) {
        (**self).set_status(code);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }
}

impl<S: ResponseSink + ?Sized> ResponseSink for Box<S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        (**self).headers_mut()
    }

    fn set_status(&mut self, code: StatusCode) {
        (**self).set_status(code);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }
}

/// Set `Content-Type: application/json` unless the caller already chose one.
pub fn set_default_content_type(headers: &mut HeaderMap) {
    if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }
}

/// In-memory [`ResponseSink`] that captures status, headers and body.
///
/// Behaves like a real response: the first status code wins, and writing a
/// body without a status code implies `200 OK`.
#[derive(Debug, Clone, Default)]
pub struct ResponseRecorder {
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: Vec<u8>,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded status code, `200 OK` if none was set.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The `Content-Type` header, if present and valid UTF-8.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, for assertions and logging.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn into_parts(self) -> (StatusCode, HeaderMap, Vec<u8>) {
        let status = self.status();
        (status, self.headers, self.body)
    }
}

impl ResponseSink for ResponseRecorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn set_status(&mut self, code: StatusCode) {
        if let Some(current) = self.status {
            tracing::debug!(%current, ignored = %code, "Superfluous status code on recorder");
            return;
        }
        self.status = Some(code);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.status.get_or_insert(StatusCode::OK);
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }
}
