//! Defines the endpoint for listing transactions a page at a time.

use axum::{Json, extract::State};

use crate::{
    Error,
    db::acquire_session,
    pagination::Pagination,
    transaction::{
        TransactionState,
        core::{Transaction, get_transactions},
    },
    validation::ValidQuery,
};

/// A route handler for listing transactions.
///
/// The query parameters `skip` and `limit` select which transactions to return,
/// see [Pagination] for the defaults.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
    ValidQuery(pagination): ValidQuery<Pagination>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = acquire_session(&state.db_connection)?;

    get_transactions(pagination, &connection)
        .map(Json)
        .inspect_err(|error| {
            tracing::error!("could not get transactions with {pagination:?}: {error}");
        })
}
