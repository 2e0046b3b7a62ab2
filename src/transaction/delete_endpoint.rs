use axum::{Json, extract::State};

use crate::{
    Error,
    database_id::TransactionId,
    db::acquire_session,
    transaction::{
        TransactionState,
        core::{Transaction, delete_transaction},
    },
    validation::ValidPath,
};

/// A route handler for deleting a transaction, responds with the deleted transaction.
///
/// Responds with 404 if there is no transaction with the given ID.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    ValidPath(transaction_id): ValidPath<TransactionId>,
) -> Result<Json<Transaction>, Error> {
    let connection = acquire_session(&state.db_connection)?;

    match delete_transaction(transaction_id, &connection) {
        Ok(transaction) => Ok(Json(transaction)),
        Err(Error::DeleteMissingTransaction) => {
            tracing::debug!("Tried to delete missing transaction {transaction_id}");
            Err(Error::DeleteMissingTransaction)
        }
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            Err(error)
        }
    }
}
