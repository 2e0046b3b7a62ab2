//! Middleware for logging requests and responses.

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;

use crate::Error;

/// The maximum number of bytes of a request or response body to log at the
/// `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The maximum size of a request body in bytes, the same as axum's default
/// body limit for extractors.
pub const REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// The bodies are passed on byte for byte, only the log line is decoded as
/// lossy UTF-8. Request bodies over [REQUEST_BODY_LIMIT] bytes are rejected
/// with 413.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match to_bytes(body, REQUEST_BODY_LIMIT).await {
        Ok(body_bytes) => body_bytes,
        Err(error) if is_length_limit_error(&error) => {
            tracing::error!("Request body is larger than {REQUEST_BODY_LIMIT} bytes");
            return Error::PayloadTooLarge.into_response();
        }
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return Error::InvalidInput("Could not read request body".to_owned()).into_response();
        }
    };

    log_body(
        "Received request",
        &format!("{parts:#?}"),
        &String::from_utf8_lossy(&body_bytes),
    );

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match to_bytes(body, usize::MAX).await {
        Ok(body_bytes) => body_bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    log_body(
        "Sending response",
        &format!("{parts:#?}"),
        &String::from_utf8_lossy(&body_bytes),
    );

    Response::from_parts(parts, Body::from(body_bytes))
}

/// Whether reading a body failed because it was over the size limit.
fn is_length_limit_error(error: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(error);

    while let Some(error) = source {
        if error.is::<LengthLimitError>() {
            return true;
        }

        source = error.source();
    }

    false
}

fn log_body(message: &str, headers: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "{message}: {headers}\nbody: {}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{message}: {headers}\nbody: {body:?}");
    }
}

/// Cut `text` to at most `max_bytes` without splitting a character.
fn truncate(text: &str, max_bytes: usize) -> &str {
    let end = text
        .char_indices()
        .map(|(index, c)| index + c.len_utf8())
        .take_while(|&end| end <= max_bytes)
        .last()
        .unwrap_or(0);

    &text[..end]
}

#[cfg(test)]
mod tests {
    use axum::{
        Json, Router,
        body::Bytes,
        http::StatusCode,
        middleware,
        routing::post,
    };
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::{REQUEST_BODY_LIMIT, logging_middleware, truncate};

    fn get_echo_server() -> TestServer {
        let app = Router::new()
            .route("/", post(|body: Bytes| async move { body }))
            .layer(middleware::from_fn(logging_middleware));

        TestServer::new(app).expect("Could not create test server.")
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("lunch", 64), "lunch");
    }

    #[test]
    fn truncate_cuts_long_text() {
        assert_eq!(truncate("abcdef", 3), "abc");
    }

    #[test]
    fn truncate_does_not_split_characters() {
        // 'é' is two bytes long.
        assert_eq!(truncate("aé", 2), "a");
        assert_eq!(truncate("aé", 3), "aé");
    }

    #[tokio::test]
    async fn passes_bodies_through_unchanged() {
        let app = Router::new()
            .route("/", post(|Json(body): Json<Value>| async move { Json(body) }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app).expect("Could not create test server.");
        let body = json!({ "description": "x".repeat(200) });

        let response = server.post("/").json(&body).await;

        response.assert_status_ok();
        response.assert_json(&body);
    }

    #[tokio::test]
    async fn passes_invalid_utf8_through_byte_for_byte() {
        let server = get_echo_server();
        let body = Bytes::from_static(b"{\"description\": \"caf\xE9 \xFF\"}");

        let response = server.post("/").bytes(body.clone()).await;

        response.assert_status_ok();
        assert_eq!(response.as_bytes(), &body);
    }

    #[tokio::test]
    async fn rejects_bodies_over_the_limit() {
        let server = get_echo_server();

        let response = server
            .post("/")
            .bytes(Bytes::from(vec![b'a'; REQUEST_BODY_LIMIT + 1]))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        response.assert_json(&json!({ "detail": "Request body is too large" }));
    }

    #[tokio::test]
    async fn accepts_bodies_at_the_limit() {
        let server = get_echo_server();

        let response = server
            .post("/")
            .bytes(Bytes::from(vec![b'a'; REQUEST_BODY_LIMIT]))
            .await;

        response.assert_status_ok();
        assert_eq!(response.as_bytes().len(), REQUEST_BODY_LIMIT);
    }
}
