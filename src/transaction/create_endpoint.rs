//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State};

use crate::{
    Error,
    db::acquire_session,
    transaction::{
        TransactionState,
        core::{Transaction, TransactionInput, create_transaction},
    },
    validation::ValidJson,
};

/// A route handler for creating a new transaction, responds with the created
/// transaction including its new ID.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    ValidJson(input): ValidJson<TransactionInput>,
) -> Result<Json<Transaction>, Error> {
    let connection = acquire_session(&state.db_connection)?;

    let transaction = create_transaction(input, &connection).inspect_err(|error| {
        tracing::error!("could not create transaction: {error}");
    })?;

    tracing::debug!("Created transaction {}", transaction.id);

    Ok(Json(transaction))
}
