//! Handlers for the example user resource.

use axum::body::Bytes;
use axum::http::StatusCode;
use jsend_core::{JsendWriter, ResponseRecorder};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::response::{JsendResponse, Recorded};

/// A user as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Request body for `POST /users`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: String,
}

/// GET /users/{id}
///
/// Only user `1` exists.
pub async fn get_user(AppPath(id): AppPath<u64>) -> AppResult<JsendResponse<User>> {
    if id != 1 {
        return Err(AppError::NotFound(format!("user {id}")));
    }

    Ok(JsendResponse::success(User {
        id,
        name: "foo".to_string(),
    }))
}

/// POST /users
///
/// Writes its response through a [`JsendWriter`]: a missing or blank `name`
/// is written as raw `{"name":"missing"}` under `400`, which the writer turns
/// into a `fail` envelope. An accepted user is echoed back under `201`.
pub async fn create_user(body: Bytes) -> AppResult<Recorded> {
    let writer = JsendWriter::wrap(ResponseRecorder::new());

    let input = serde_json::from_slice::<NewUser>(&body).unwrap_or_default();
    let name = input.name.trim();

    if name.is_empty() {
        writer.set_status_code(StatusCode::BAD_REQUEST);
        writer.write(br#"{"name":"missing"}"#)?;
        return Ok(Recorded(writer.into_inner()));
    }

    let accepted = serde_json::to_vec(&NewUser {
        name: name.to_string(),
    })
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    writer.set_status_code(StatusCode::CREATED);
    writer.write(&accepted)?;
    tracing::info!(name, "User accepted");

    Ok(Recorded(writer.into_inner()))
}
