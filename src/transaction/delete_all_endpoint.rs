use axum::{Json, extract::State};

use crate::{
    Error,
    db::acquire_session,
    transaction::{TransactionState, core::delete_all_transactions},
};

/// A route handler for deleting every transaction, responds with the number
/// of transactions deleted.
///
/// There is no confirmation step, callers are trusted to mean it.
pub async fn delete_all_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<usize>, Error> {
    let connection = acquire_session(&state.db_connection)?;

    let deleted_count = delete_all_transactions(&connection).inspect_err(|error| {
        tracing::error!("could not delete all transactions: {error}");
    })?;

    tracing::info!("Deleted {deleted_count} transactions");

    Ok(Json(deleted_count))
}
