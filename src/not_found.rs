//! The fallback handlers for unknown routes and unsupported methods.

use axum::response::{IntoResponse, Response};

use crate::Error;

/// Respond with 404 and a JSON body for any unknown route.
pub async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}

/// Respond with 405 and a JSON body when a known route does not accept the
/// request method.
pub async fn get_405_method_not_allowed() -> Response {
    Error::MethodNotAllowed.into_response()
}
