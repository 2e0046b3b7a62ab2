//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

/// The root route which responds with a greeting, useful as a health check.
pub const ROOT: &str = "/";
/// The route for creating, listing and deleting all transactions.
pub const TRANSACTIONS: &str = "/transactions/";
/// [TRANSACTIONS] without the trailing slash.
pub const TRANSACTIONS_NO_SLASH: &str = "/transactions";
/// The route for deleting a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// Assumes that a parameter is a string that starts with '{' and ends with '}'.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) => {
            format!("{}{}{}", &endpoint_path[..start], id, &endpoint_path[end + 1..])
        }
        _ => endpoint_path.to_owned(),
    }
}

#[cfg(test)]
mod format_endpoint_tests {
    use super::{TRANSACTION, TRANSACTIONS, format_endpoint};

    #[test]
    fn replaces_parameter_with_id() {
        assert_eq!(format_endpoint(TRANSACTION, 42), "/transactions/42");
    }

    #[test]
    fn handles_negative_ids() {
        assert_eq!(format_endpoint(TRANSACTION, -1), "/transactions/-1");
    }

    #[test]
    fn leaves_endpoint_without_parameter_unchanged() {
        assert_eq!(format_endpoint(TRANSACTIONS, 1), TRANSACTIONS);
    }
}
