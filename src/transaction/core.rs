//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId, pagination::Pagination};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are never modified after they are created. To create one,
/// insert a [TransactionInput] with [create_transaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A free-form label for grouping transactions, e.g. "Food" or "Rent".
    pub category: String,
    /// A text description of what the transaction was for. May be empty.
    pub description: String,
    /// When the transaction happened.
    ///
    /// Stored as given, the format is up to the client.
    pub date: String,
}

/// The fields needed to create a [Transaction].
///
/// All fields are required and there are no defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// The amount of money spent or earned.
    pub amount: f64,
    /// The category label, e.g. "Food".
    pub category: String,
    /// A text description of the transaction.
    pub description: String,
    /// When the transaction happened, e.g. "2024-01-01".
    pub date: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// The database assigns the new transaction an ID that has never been used
/// before, even by transactions that have since been deleted.
///
/// # Errors
/// This function will return a:
/// - [Error::StorageUnavailable] if the database cannot be reached,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    input: TransactionInput,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (amount, category, description, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, amount, category, description, date",
        )?
        .query_row(
            (input.amount, input.category, input.description, input.date),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a page of transactions ordered by ID.
///
/// Returns at most `pagination.limit` transactions, starting after the first
/// `pagination.skip` transactions. Skipping past the end gives an empty list.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_transactions(
    pagination: Pagination,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, amount, category, description, date FROM transactions
             ORDER BY id ASC
             LIMIT :limit OFFSET :offset",
        )?
        .query_map(
            &[(":limit", &pagination.limit), (":offset", &pagination.skip)],
            map_transaction_row,
        )?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Delete a transaction by its `id`, returning the deleted transaction.
///
/// The lookup and delete happen in a single statement, so a concurrent
/// request deleting the same transaction cannot cause a partial result.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingTransaction] if `id` does not refer to a transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare(
            "DELETE FROM transactions WHERE id = :id
             RETURNING id, amount, category, description, date",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::DeleteMissingTransaction,
            error => error.into(),
        })
}

/// Delete every transaction, returning how many were deleted.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn delete_all_transactions(connection: &Connection) -> Result<usize, Error> {
    connection
        .execute("DELETE FROM transactions", ())
        .map_err(|error| error.into())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS ix_transactions_id ON transactions(id);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category = row.get(2)?;
    let description = row.get(3)?;
    let date = row.get(4)?;

    Ok(Transaction {
        id,
        amount,
        category,
        description,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
pub(crate) fn lunch() -> TransactionInput {
    TransactionInput {
        amount: 42.5,
        category: "Food".to_owned(),
        description: "lunch".to_owned(),
        date: "2024-01-01".to_owned(),
    }
}
