//! Transaction management for the budgeting API.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionInput` used to create one
//! - Database functions for storing, paging through, and deleting transactions
//! - Route handlers for the transaction endpoints

mod core;
mod create_endpoint;
mod delete_all_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod state;

pub use self::core::{Transaction, TransactionInput, create_transaction_table};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_all_endpoint::delete_all_transactions_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::get_transactions_endpoint;
pub use state::TransactionState;
