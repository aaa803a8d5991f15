//! Direct envelope encoders.
//!
//! The `encode_*` and [`emit_raw`] functions write one envelope to a sink and
//! touch nothing else. [`success`], [`fail`] and [`error`] are the handler-facing
//! variants: they also set the status code and the default content type.
//!
//! ```
//! use http::StatusCode;
//! use jsend_core::{codec, ResponseRecorder};
//! use serde_json::json;
//!
//! let mut recorder = ResponseRecorder::new();
//! codec::success(&mut recorder, &json!({"id": 1, "name": "foo"}), StatusCode::OK).unwrap();
//!
//! assert_eq!(recorder.content_type(), Some("application/json"));
//! assert_eq!(
//!     recorder.body_string(),
//!     r#"{"status":"success","data":{"id":1,"name":"foo"}}"#
//! );
//! ```

use http::StatusCode;
use serde::Serialize;

use crate::envelope::Envelope;
use crate::error::JsendResult;
use crate::sink::{set_default_content_type, ResponseSink};
use crate::status::Status;

/// Serialize `envelope` and write it to `sink` in a single call.
pub fn write_envelope<S>(sink: &mut S, envelope: &Envelope) -> JsendResult<usize>
where
    S: ResponseSink + ?Sized,
{
    let body = envelope.to_vec()?;
    Ok(sink.write(&body)?)
}

/// Write `payload` as a `success` envelope.
pub fn encode_success<S, T>(sink: &mut S, payload: &T) -> JsendResult<usize>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    write_envelope(sink, &Envelope::from_payload(Status::Success, payload)?)
}

/// Write `payload` as a `fail` envelope.
pub fn encode_fail<S, T>(sink: &mut S, payload: &T) -> JsendResult<usize>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    write_envelope(sink, &Envelope::from_payload(Status::Fail, payload)?)
}

/// Write `message` as an `error` envelope.
pub fn encode_error<S>(sink: &mut S, message: &str) -> JsendResult<usize>
where
    S: ResponseSink + ?Sized,
{
    write_envelope(sink, &Envelope::error(message))
}

/// Write bytes the caller already JSON-encoded under `status`.
///
/// For `success` and `fail` the bytes are embedded verbatim as `data` and
/// must be a single JSON value; otherwise [`JsendError::InvalidRawJson`] is
/// returned and nothing is written. For `error` the bytes are taken as the
/// message text.
///
/// [`JsendError::InvalidRawJson`]: crate::JsendError::InvalidRawJson
pub fn emit_raw<S>(sink: &mut S, status: Status, raw: &[u8]) -> JsendResult<usize>
where
    S: ResponseSink + ?Sized,
{
    write_envelope(sink, &Envelope::from_raw(status, raw)?)
}

/// Respond with `payload` under a `success` envelope and status `code`.
pub fn success<S, T>(sink: &mut S, payload: &T, code: StatusCode) -> JsendResult<usize>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    respond(sink, code, &Envelope::from_payload(Status::Success, payload)?)
}

/// Respond with `payload` under a `fail` envelope and status `code`.
pub fn fail<S, T>(sink: &mut S, payload: &T, code: StatusCode) -> JsendResult<usize>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    respond(sink, code, &Envelope::from_payload(Status::Fail, payload)?)
}

/// Respond with `message` under an `error` envelope and status `code`.
pub fn error<S>(sink: &mut S, message: &str, code: StatusCode) -> JsendResult<usize>
where
    S: ResponseSink + ?Sized,
{
    respond(sink, code, &Envelope::error(message))
}

// The body is serialized before the sink is touched so an encode failure
// leaves headers and status unchanged.
fn respond<S>(sink: &mut S, code: StatusCode, envelope: &Envelope) -> JsendResult<usize>
where
    S: ResponseSink + ?Sized,
{
    let body = envelope.to_vec()?;
    set_default_content_type(sink.headers_mut());
    sink.set_status(code);
    Ok(sink.write(&body)?)
}
