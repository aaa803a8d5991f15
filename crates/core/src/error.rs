/// Errors produced while shaping a response into a JSend envelope.
///
/// None of these are logged inside this crate; every one is returned to the
/// caller, which decides whether to emit a fallback body.
#[derive(Debug, thiserror::Error)]
pub enum JsendError {
    /// A structured payload could not be serialized. Nothing was written.
    #[error("jsend: could not json encode given data: {0}")]
    Encode(#[source] serde_json::Error),

    /// Raw bytes meant to be embedded as `data` are not a valid JSON value.
    ///
    /// The status code may already be on the wire; only the body is
    /// suppressed.
    #[error("jsend: given data is not valid raw json: {0}")]
    InvalidRawJson(#[source] serde_json::Error),

    /// A second write was attempted on a [`JsendWriter`](crate::JsendWriter).
    #[error("jsend: written already")]
    WrittenAlready,

    /// The underlying sink failed to accept the body.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results carrying a [`JsendError`].
pub type JsendResult<T> = Result<T, JsendError>;

impl From<JsendError> for std::io::Error {
    fn from(err: JsendError) -> Self {
        match err {
            JsendError::Io(io) => io,
            JsendError::InvalidRawJson(_) | JsendError::Encode(_) => {
                std::io::Error::new(std::io::ErrorKind::InvalidData, err)
            }
            JsendError::WrittenAlready => std::io::Error::other(err),
        }
    }
}
