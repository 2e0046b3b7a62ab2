//! Extractors that validate request input before it reaches a handler.
//!
//! These wrap axum's `Json`, `Query` and `Path` extractors so that a
//! malformed request is turned into [Error::InvalidInput] and answered with
//! `422 Unprocessable Entity` and a JSON body, instead of axum's default
//! plain text rejections.

use axum::{
    extract::{
        FromRequest, FromRequestParts,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::Error;

/// A JSON request body deserialized into `T`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ValidJson<T>(pub T);

/// Query string parameters deserialized into `T`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct ValidQuery<T>(pub T);

/// Path parameters deserialized into `T`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ValidPath<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {rejection}");

        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Error::PayloadTooLarge;
        }

        Error::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {rejection}");
        Error::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameters: {rejection}");
        Error::InvalidInput(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{TransactionInput, validation::ValidJson};

    async fn echo(ValidJson(input): ValidJson<TransactionInput>) -> axum::Json<TransactionInput> {
        axum::Json(input)
    }

    fn get_test_server() -> TestServer {
        let app = Router::new().route("/", post(echo));

        TestServer::new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let server = get_test_server();
        let body = json!({
            "amount": 42.5,
            "category": "Food",
            "description": "lunch",
            "date": "2024-01-01"
        });

        let response = server.post("/").json(&body).await;

        response.assert_status_ok();
        response.assert_json(&body);
    }

    #[tokio::test]
    async fn accepts_integer_amount() {
        let server = get_test_server();

        let response = server
            .post("/")
            .json(&json!({
                "amount": 10,
                "category": "Rent",
                "description": "",
                "date": "today"
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<TransactionInput>().amount, 10.0);
    }

    #[tokio::test]
    async fn rejects_missing_field() {
        let server = get_test_server();

        let response = server
            .post("/")
            .json(&json!({
                "amount": 42.5,
                "category": "Food",
                "description": "lunch"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let detail = response.json::<serde_json::Value>()["detail"].clone();
        assert!(detail.as_str().unwrap().contains("date"), "{detail}");
    }

    #[tokio::test]
    async fn rejects_wrong_field_type() {
        let server = get_test_server();

        let response = server
            .post("/")
            .json(&json!({
                "amount": "a lot",
                "category": "Food",
                "description": "lunch",
                "date": "2024-01-01"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn rejects_null_field() {
        let server = get_test_server();

        let response = server
            .post("/")
            .json(&json!({
                "amount": 1.0,
                "category": null,
                "description": "lunch",
                "date": "2024-01-01"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let server = get_test_server();

        let response = server
            .post("/")
            .text("{\"amount\": ")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn rejects_missing_body() {
        let server = get_test_server();

        let response = server.post("/").await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn keeps_413_for_oversized_body() {
        let server = get_test_server();

        let response = server
            .post("/")
            .json(&json!({
                "amount": 1.0,
                "category": "Food",
                "description": "x".repeat(crate::REQUEST_BODY_LIMIT),
                "date": "2024-01-01"
            }))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        response.assert_json(&json!({ "detail": "Request body is too large" }));
    }
}
