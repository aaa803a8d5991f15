//! Request handlers for the demo API.
//!
//! `users` shows both ways of producing JSend bodies (typed responders and the
//! write-once wrapper); `echo` runs an arbitrary body and status code through
//! the wrapper so its classification can be observed over HTTP.

pub mod echo;
pub mod fallback;
pub mod users;
