//! Conditional GET via entity tags.

use crate::etag::generate_etag;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::middleware::Handler;

/// Request header carrying the client's cached tag.
pub const IF_NONE_MATCH: &str = "If-None-Match";

/// Response header carrying the computed tag.
pub const ETAG: &str = "ETag";

const CACHE_CONTROL: &str = "Cache-Control";

/// Options for [`ETagMiddleware`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ETagOptions {
    /// Keep the downstream `Cache-Control` header on a 304 response.
    pub preserve_cache_control: bool,
}

/// Wraps a handler and answers repeated GETs with 304 Not Modified.
///
/// Only `GET` requests whose downstream response is `200 OK` are considered.
/// For those, a strong tag is computed from the request path (query string
/// excluded) and response body. If the client's `If-None-Match` weakly matches it the response is
/// replaced by a bare 304, otherwise the tag is sent in the `ETag` header.
/// Everything else is returned exactly as the inner handler produced it.
pub struct ETagMiddleware<H> {
    inner: H,
    options: ETagOptions,
}

impl<H: Handler> ETagMiddleware<H> {
    pub fn new(inner: H) -> Self {
        Self::with_options(inner, ETagOptions::default())
    }

    pub fn with_options(inner: H, options: ETagOptions) -> Self {
        Self { inner, options }
    }

    pub fn options(&self) -> ETagOptions {
        self.options
    }

    fn validate(&self, request: &Request, mut response: Response) -> Response {
        // The query string does not name a different resource
        let path = request.path_only();
        let etag = generate_etag(path, &response.body);

        tracing::debug!(path, etag = %etag, "Computed ETag");

        if let Some(incoming) = request.header(IF_NONE_MATCH) {
            if etag.weak_match(incoming) {
                tracing::debug!(
                    path,
                    etag = %etag,
                    "If-None-Match matched, responding 304"
                );
                return self.not_modified(&response);
            }
        }

        response.set_header(ETAG, etag.to_string());
        response
    }

    fn not_modified(&self, original: &Response) -> Response {
        let mut response = Response::not_modified();

        if self.options.preserve_cache_control {
            if let Some(value) = original.header(CACHE_CONTROL) {
                response.set_header(CACHE_CONTROL, value);
            }
        }

        response
    }
}

impl<H: Handler> Handler for ETagMiddleware<H> {
    fn handle(&self, request: &Request) -> Response {
        let response = self.inner.handle(request);

        if request.method != Method::GET || response.status != StatusCode::Ok {
            tracing::trace!(
                method = ?request.method,
                status = response.status.as_u16(),
                "Response not eligible for ETag"
            );
            return response;
        }

        self.validate(request, response)
    }
}

