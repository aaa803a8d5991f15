//! JSend response shaping.
//!
//! Every response body is wrapped in an envelope whose `status` is one of
//! `success`, `fail` or `error`:
//!
//! ```text
//! {"status": "success", "data": {"foo": "bar"}}
//! {"status": "fail",    "data": {"foo": "invalid"}}
//! {"status": "error",   "message": "we are closed"}
//! ```
//!
//! Two ways in:
//!
//! - [`codec::success`], [`codec::fail`] and [`codec::error`] encode a value
//!   and write it with an explicit status code.
//! - [`JsendWriter`] wraps a [`ResponseSink`]; the status is derived from the
//!   HTTP status code when the single raw body write arrives (`5xx` is
//!   `error`, `4xx` is `fail`, anything else `success`).
//!
//! Both set `Content-Type: application/json` unless the caller already chose
//! a content type.

pub mod codec;
pub mod envelope;
pub mod error;
pub mod sink;
pub mod status;
pub mod writer;

pub use envelope::Envelope;
pub use error::{JsendError, JsendResult};
pub use sink::{set_default_content_type, ResponseRecorder, ResponseSink, JSON_CONTENT_TYPE};
pub use status::{classify, Status};
pub use writer::JsendWriter;
