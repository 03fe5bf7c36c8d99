//! Request handlers and the middleware that wraps them.
//!
//! A [`Handler`] turns a [`Request`] into a [`Response`]. Middleware is a
//! handler that owns another handler and runs code around it, so stages are
//! composed by plain wrapping:
//!
//! ```
//! # use sentinel_etag::http::request::Request;
//! # use sentinel_etag::http::response::Response;
//! # use sentinel_etag::middleware::ETagMiddleware;
//! let health = |_req: &Request| Response::ok(b"up".to_vec());
//! let handler = ETagMiddleware::new(health);
//! # let _ = &handler;
//! ```

pub mod etag;

pub use etag::{ETAG, ETagMiddleware, ETagOptions, IF_NONE_MATCH};

use crate::http::request::Request;
use crate::http::response::Response;

/// Anything that can answer a request.
pub trait Handler: Send + Sync {
    fn handle(&self, request: &Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    fn handle(&self, request: &Request) -> Response {
        self(request)
    }
}

