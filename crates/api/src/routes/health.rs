use axum::{routing::get, Router};
use serde::Serialize;

use crate::response::JsendResponse;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> JsendResponse<HealthResponse> {
    JsendResponse::success(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
