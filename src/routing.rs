//! Application router configuration.

use axum::{
    Json, Router, middleware,
    routing::{MethodRouter, delete, get},
};

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    not_found::{get_404_not_found, get_405_method_not_allowed},
    transaction::{
        create_transaction_endpoint, delete_all_transactions_endpoint,
        delete_transaction_endpoint, get_transactions_endpoint,
    },
};

/// The fixed greeting returned by the root route.
pub const GREETING: &str = "hello";

/// Return a router with all the app's routes.
///
/// The transaction collection is served both with and without the trailing
/// slash, and only the origins in the state's CORS config may call the API
/// from a browser.
pub fn build_router(state: AppState) -> Router {
    let cors_layer = state.cors_config.layer();

    Router::new()
        .route(endpoints::ROOT, get(get_greeting))
        .route(endpoints::TRANSACTIONS, transactions_routes())
        .route(endpoints::TRANSACTIONS_NO_SLASH, transactions_routes())
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors_layer)
        .with_state(state)
}

/// The handlers for the transaction collection.
fn transactions_routes() -> MethodRouter<AppState> {
    get(get_transactions_endpoint)
        .post(create_transaction_endpoint)
        .delete(delete_all_transactions_endpoint)
}

/// The root path '/' responds with a greeting so clients can check the server is up.
async fn get_greeting() -> Json<&'static str> {
    Json(GREETING)
}
