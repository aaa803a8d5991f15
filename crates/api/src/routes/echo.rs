use axum::routing::post;
use axum::Router;

use crate::handlers::echo;

/// Echo routes mounted at `/echo`.
///
/// ```text
/// POST   /{code}            -> echo
/// ```
pub fn router() -> Router {
    Router::new().route("/{code}", post(echo::echo))
}
