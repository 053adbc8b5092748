//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::middleware::role_auth_middleware;
use crate::server::routes::{health_handler, me_handler, preview_handler};

/// Build the Axum application router
///
/// Fails only if the configured role header is not a valid header name.
pub fn build_app(config: &Config) -> anyhow::Result<Router> {
    let role_header = Arc::new(HeaderName::from_bytes(config.role_header.as_bytes())?);

    let cors = CorsLayer::new()
        .allow_origin(allow_origin(&config.allowed_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, (*role_header).clone()]);

    let role_header_for_middleware = role_header.clone();

    let app = Router::new()
        .route("/api/me", get(me_handler))
        .route("/api/preview/:entity_type", post(preview_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            role_auth_middleware(role_header_for_middleware.clone(), req, next)
        })) // Role resolution
        // Health check (no role needed)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// CORS origins from configuration; no configured origins allows any (development)
fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.is_empty() {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
