//! Write-once decorator that shapes a raw body by status code.

use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use http::{HeaderMap, StatusCode};

use crate::codec::write_envelope;
use crate::envelope::Envelope;
use crate::error::{JsendError, JsendResult};
use crate::sink::{set_default_content_type, ResponseSink};
use crate::status::Status;

/// Wraps a [`ResponseSink`] so the first body write becomes a JSend envelope.
///
/// The envelope status is derived from the last code passed to
/// [`set_status_code`](Self::set_status_code): `5xx` gives `error` (the body
/// becomes the `message` text), `4xx` gives `fail`, anything else `success`
/// (the body must already be JSON and is embedded verbatim as `data`).
///
/// Only one write is accepted. All later writes return
/// [`JsendError::WrittenAlready`] and leave the sink alone, even if the first
/// write failed.
///
/// The sink shares the state mutex, so the lock is held across the single
/// delegated write. No second write can ever reach the sink, so a slow sink
/// only delays late callers until they observe `WrittenAlready`.
///
/// ```
/// use http::StatusCode;
/// use jsend_core::{JsendWriter, ResponseRecorder};
///
/// let mut recorder = ResponseRecorder::new();
/// let writer = JsendWriter::wrap(&mut recorder);
/// writer.set_status_code(StatusCode::BAD_REQUEST);
/// writer.write(br#"{"foo":"bar"}"#).unwrap();
/// drop(writer);
///
/// assert_eq!(recorder.body_string(), r#"{"status":"fail","data":{"foo":"bar"}}"#);
/// ```
#[derive(Debug)]
pub struct JsendWriter<S> {
    inner: Mutex<Inner<S>>,
}

#[derive(Debug)]
struct Inner<S> {
    sink: S,
    status_code: Option<StatusCode>,
    written: bool,
}

impl<S: ResponseSink> JsendWriter<S> {
    /// Wrap `sink`, defaulting its `Content-Type` to `application/json`.
    pub fn wrap(mut sink: S) -> Self {
        set_default_content_type(sink.headers_mut());
        Self {
            inner: Mutex::new(Inner {
                sink,
                status_code: None,
                written: false,
            }),
        }
    }

    /// Record `code` for classification and send it to the sink right away.
    pub fn set_status_code(&self, code: StatusCode) {
        let mut inner = self.lock();
        inner.status_code = Some(code);
        inner.sink.set_status(code);
    }

    /// Shape `raw` into an envelope and write it to the sink.
    ///
    /// Returns the number of bytes the sink accepted, which includes the
    /// envelope framing and so differs from `raw.len()`.
    pub fn write(&self, raw: &[u8]) -> JsendResult<usize> {
        let mut inner = self.lock();
        if inner.written {
            return Err(JsendError::WrittenAlready);
        }
        inner.written = true;

        let status = inner.status_code.map_or(Status::Success, Status::from);
        tracing::trace!(%status, len = raw.len(), "Wrapping body in envelope");

        let envelope = Envelope::from_raw(status, raw)?;
        write_envelope(&mut inner.sink, &envelope)
    }

    /// Run `f` against the sink's headers.
    pub fn with_headers<R>(&self, f: impl FnOnce(&mut HeaderMap) -> R) -> R {
        f(self.lock().sink.headers_mut())
    }

    /// The last status code set through this writer, if any.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.lock().status_code
    }

    /// Whether the single write has been consumed.
    pub fn is_written(&self) -> bool {
        self.lock().written
    }

    /// Give back the wrapped sink.
    pub fn into_inner(self) -> S {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .sink
    }

    // The guarded state is two plain fields, so a panic elsewhere cannot
    // leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn inner_mut(&mut self) -> &mut Inner<S> {
        self.inner.get_mut().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: ResponseSink> ResponseSink for JsendWriter<S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner_mut().sink.headers_mut()
    }

    fn set_status(&mut self, code: StatusCode) {
        self.set_status_code(code);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        JsendWriter::write(&*self, buf).map_err(io::Error::from)
    }
}
