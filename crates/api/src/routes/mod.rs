pub mod echo;
pub mod health;
pub mod users;

use axum::Router;

use crate::handlers::fallback;

/// Build the demo route tree.
///
/// ```text
/// /health                 GET   service health (success envelope)
/// /users                  POST  create user (write-once wrapper)
/// /users/{id}             GET   fetch user (typed responder)
/// /echo/{code}            POST  wrap raw body under status code
/// *                       any   404 fail envelope
/// ```
pub fn api_routes() -> Router {
    Router::new()
        .merge(health::router())
        .nest("/users", users::router())
        .nest("/echo", echo::router())
        .fallback(fallback::not_found)
}
