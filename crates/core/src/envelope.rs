//! The JSend envelope: the top-level object every response body is wrapped in.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{JsendError, JsendResult};
use crate::status::Status;

/// Wire-level JSend response body.
///
/// Serializes as `{"status": .., "data"?: .., "message"?: ..}`. `data` is
/// embedded verbatim and is never emitted as `null`; `message` only appears
/// on `error` envelopes and is omitted when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Box<RawValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Envelope {
    /// A `success` envelope carrying already-encoded `data`.
    pub fn success(data: Box<RawValue>) -> Self {
        Self::with_data(Status::Success, Some(data))
    }

    /// A `fail` envelope carrying already-encoded `data`.
    pub fn fail(data: Box<RawValue>) -> Self {
        Self::with_data(Status::Fail, Some(data))
    }

    /// An `error` envelope. An empty message is omitted from the wire.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: Status::Error,
            data: None,
            message: (!message.is_empty()).then_some(message),
        }
    }

    /// An envelope with only a status tag, e.g. `{"status":"success"}`.
    pub fn empty(status: Status) -> Self {
        Self {
            status,
            data: None,
            message: None,
        }
    }

    /// Serialize a structured payload and wrap it under `status`.
    ///
    /// A payload that serializes to `null` is treated as absent.
    pub(crate) fn from_payload<T>(status: Status, payload: &T) -> JsendResult<Self>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::value::to_raw_value(payload).map_err(JsendError::Encode)?;
        Ok(Self::with_data(status, Some(data)))
    }

    /// Build an envelope from bytes the caller already encoded.
    ///
    /// For `error` the bytes become the message text. Otherwise they must be
    /// a single JSON value (or empty, meaning no payload).
    pub(crate) fn from_raw(status: Status, raw: &[u8]) -> JsendResult<Self> {
        if status == Status::Error {
            return Ok(Self::error(String::from_utf8_lossy(raw)));
        }
        if raw.is_empty() {
            return Ok(Self::empty(status));
        }
        let data: Box<RawValue> =
            serde_json::from_slice(raw).map_err(JsendError::InvalidRawJson)?;
        Ok(Self::with_data(status, Some(data)))
    }

    fn with_data(status: Status, data: Option<Box<RawValue>>) -> Self {
        Self {
            status,
            data: data.filter(|raw| raw.get() != "null"),
            message: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The embedded payload, verbatim.
    pub fn data(&self) -> Option<&RawValue> {
        self.data.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Serialize the envelope to its wire bytes.
    pub fn to_vec(&self) -> JsendResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(JsendError::Encode)
    }

    /// Parse an envelope received from the wire.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
