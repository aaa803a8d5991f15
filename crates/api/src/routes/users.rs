//! Route definitions for the example user resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;

/// User routes mounted at `/users`.
///
/// ```text
/// POST   /                  -> create_user
/// GET    /{id}              -> get_user
/// ```
pub fn router() -> Router {
    Router::new()
        .route("/", post(users::create_user))
        .route("/{id}", get(users::get_user))
}
