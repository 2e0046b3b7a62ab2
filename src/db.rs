//! Database set up and per-request sessions.

use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{Error, transaction::create_transaction_table};

/// A database session scoped to a single request.
///
/// The session holds the lock on the shared connection and releases it when
/// dropped, whichever way the request handler returns.
pub type Session<'a> = MutexGuard<'a, Connection>;

/// Acquire a session on the shared `db_connection`.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if the lock was poisoned by a request
/// that panicked while holding it.
pub fn acquire_session(db_connection: &Mutex<Connection>) -> Result<Session<'_>, Error> {
    db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}

/// Create the tables for the domain models if they do not already exist.
///
/// Safe to call on every start up.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_transaction_table(connection)?;

    Ok(())
}
