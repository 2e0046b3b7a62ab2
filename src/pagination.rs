//! This modules defines the common functionality for paging data.

use serde::Deserialize;

/// The number of records to skip when not specified in a request.
pub const DEFAULT_SKIP: i64 = 0;
/// The maximum number of records to return when not specified in a request.
pub const DEFAULT_LIMIT: i64 = 100;

/// An offset-based window over an ordered set of records.
///
/// Deserialized from the query string, e.g. `?skip=20&limit=10`, where both
/// parameters are optional non-negative integers. Negative values are
/// rejected during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "PaginationQuery")]
pub struct Pagination {
    /// How many records to skip from the start.
    pub skip: i64,
    /// The maximum number of records to return.
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// The raw query parameters before the range check.
#[derive(Deserialize)]
struct PaginationQuery {
    #[serde(default = "default_skip")]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}

impl TryFrom<PaginationQuery> for Pagination {
    type Error = String;

    fn try_from(query: PaginationQuery) -> Result<Self, Self::Error> {
        if query.skip < 0 {
            return Err(format!("skip must not be negative, got {}", query.skip));
        }

        if query.limit < 0 {
            return Err(format!("limit must not be negative, got {}", query.limit));
        }

        Ok(Self {
            skip: query.skip,
            limit: query.limit,
        })
    }
}

fn default_skip() -> i64 {
    DEFAULT_SKIP
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use axum::{extract::Query, http::Uri};

    use super::{DEFAULT_LIMIT, DEFAULT_SKIP, Pagination};

    fn parse(uri: &str) -> Result<Pagination, String> {
        let uri: Uri = uri.parse().unwrap();

        Query::<Pagination>::try_from_uri(&uri)
            .map(|Query(pagination)| pagination)
            .map_err(|rejection| rejection.body_text())
    }

    #[test]
    fn uses_defaults_when_missing() {
        assert_eq!(
            parse("/transactions/"),
            Ok(Pagination {
                skip: DEFAULT_SKIP,
                limit: DEFAULT_LIMIT
            })
        );
    }

    #[test]
    fn parses_both_parameters() {
        assert_eq!(
            parse("/transactions/?skip=20&limit=5"),
            Ok(Pagination { skip: 20, limit: 5 })
        );
    }

    #[test]
    fn fills_in_missing_parameter() {
        assert_eq!(
            parse("/transactions/?limit=5"),
            Ok(Pagination {
                skip: DEFAULT_SKIP,
                limit: 5
            })
        );
    }

    #[test]
    fn rejects_negative_values() {
        let skip_error = parse("/transactions/?skip=-1").unwrap_err();
        assert!(skip_error.contains("skip must not be negative"), "{skip_error}");

        let limit_error = parse("/transactions/?limit=-5").unwrap_err();
        assert!(limit_error.contains("limit must not be negative"), "{limit_error}");
    }

    #[test]
    fn accepts_values_beyond_u32() {
        assert_eq!(
            parse("/transactions/?skip=5000000000&limit=5000000000"),
            Ok(Pagination {
                skip: 5_000_000_000,
                limit: 5_000_000_000
            })
        );
    }

    #[test]
    fn rejects_non_integers() {
        assert!(parse("/transactions/?limit=ten").is_err());
        assert!(parse("/transactions/?limit=1.5").is_err());
    }
}
