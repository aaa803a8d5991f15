//! Echo handler: the raw request body is written through a [`JsendWriter`].

use axum::body::Bytes;
use axum::http::StatusCode;
use jsend_core::{JsendError, JsendWriter, ResponseRecorder};

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::response::Recorded;

/// POST /echo/{code}
///
/// Responds with status `code` (`200..=999`) and the request body wrapped
/// according to it. A body that is not valid JSON under a non-`5xx` code
/// yields the status line with an empty body, exactly as the writer leaves
/// the sink.
pub async fn echo(AppPath(code): AppPath<u16>, body: Bytes) -> AppResult<Recorded> {
    // Informational codes cannot be the final status of a response.
    let status = StatusCode::from_u16(code)
        .ok()
        .filter(|status| !status.is_informational())
        .ok_or_else(|| AppError::BadRequest(format!("invalid status code {code}")))?;

    let writer = JsendWriter::wrap(ResponseRecorder::new());
    writer.set_status_code(status);

    match writer.write(&body) {
        Ok(written) => tracing::debug!(%status, written, "Echoed body"),
        Err(JsendError::InvalidRawJson(err)) => {
            tracing::debug!(%status, error = %err, "Echo body is not valid JSON");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(Recorded(writer.into_inner()))
}
