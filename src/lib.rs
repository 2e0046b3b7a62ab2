//! A small REST API for recording financial transactions.
//!
//! Transactions are stored in a single SQLite table and can be created,
//! listed a page at a time, deleted one by one, or deleted all at once.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use rusqlite::ffi::ErrorCode;
use serde_json::json;
use tokio::signal;

mod app_state;
mod cors;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod not_found;
mod pagination;
mod routing;
mod transaction;
mod validation;

pub use app_state::AppState;
pub use cors::{CorsConfig, DEFAULT_ALLOWED_ORIGIN};
pub use database_id::TransactionId;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{Transaction, TransactionInput};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::debug!("Received ctrl+c signal."),
        _ = terminate => tracing::debug!("Received terminate signal."),
    }

    tracing::info!("Shutting down, waiting for in-flight requests to finish");
    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body, query string or path could not be parsed into the
    /// expected shape.
    ///
    /// The string describes what was wrong with the input and is safe to show
    /// to the client.
    #[error("{0}")]
    InvalidInput(String),

    /// Tried to delete a transaction that does not exist.
    ///
    /// This also covers the case where another request deleted the same
    /// transaction first.
    #[error("Transaction not found")]
    DeleteMissingTransaction,

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("Not Found")]
    NotFound,

    /// The route exists but does not accept the request method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The request body is larger than [REQUEST_BODY_LIMIT] bytes.
    #[error("Request body is too large")]
    PayloadTooLarge,

    /// The database file could not be opened or is busy or locked by another
    /// process.
    #[error("the database is unavailable: {0}")]
    StorageUnavailable(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error @ rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: ErrorCode::CannotOpen | ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked,
                    ..
                },
                _,
            ) => {
                tracing::error!("the database is unavailable: {}", error);
                Error::StorageUnavailable(error.to_string())
            }
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::DeleteMissingTransaction | Error::NotFound => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::StorageUnavailable(_) | Error::DatabaseLockError => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Error::SqlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match self {
            // SQL errors are not intended to be shown to the client.
            Error::SqlError(error) => {
                tracing::error!("An unexpected error occurred: {}", error);
                "Internal Server Error".to_owned()
            }
            error => error.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
