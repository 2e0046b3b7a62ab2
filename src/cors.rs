//! Cross-origin resource sharing (CORS) policy.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// The origin of the local development frontend.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// The config for which web origins may call the API.
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    /// Origins, e.g. "http://localhost:3000", that may access the API with
    /// credentials.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_owned()],
        }
    }
}

impl CorsConfig {
    /// Build the layer that enforces this policy.
    ///
    /// Credentials are allowed, so methods and headers are mirrored from the
    /// preflight request rather than using a wildcard. Origins that are not
    /// valid header values are skipped with a warning.
    pub fn layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(origin) => Some(origin),
                Err(error) => {
                    tracing::warn!("Ignoring invalid CORS origin {origin:?}: {error}");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    }
}
