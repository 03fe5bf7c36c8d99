//! Application endpoints and their registration.

use serde::Serialize;

use crate::config::ETagConfig;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::middleware::{ETagMiddleware, Handler};
use crate::server::Router;

const HEALTH_PATHS: [&str; 2] = ["/health", "/api/healthcheck"];

#[derive(Debug, Serialize)]
struct Health {
    healthy: &'static str,
}

/// `GET /health`: always `{"healthy":"OK"}`.
pub fn health(_request: &Request) -> Response {
    match Response::json(&Health { healthy: "OK" }) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize health response");
            Response::internal_error()
        }
    }
}

/// Builds the application router. Routes listed in `etag.routes` are
/// wrapped in [`ETagMiddleware`].
pub fn routes(etag: &ETagConfig) -> Router {
    HEALTH_PATHS.iter().fold(Router::new(), |router, path| {
        router.route_boxed(Method::GET, *path, with_etag(etag, path, health))
    })
}

fn with_etag<H: Handler + 'static>(etag: &ETagConfig, path: &str, handler: H) -> Box<dyn Handler> {
    if etag.is_enabled_for(path) {
        tracing::debug!(path, "ETag validation enabled");
        Box::new(ETagMiddleware::with_options(handler, etag.options()))
    } else {
        Box::new(handler)
    }
}
