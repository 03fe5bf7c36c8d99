//! Sentinel ETag - conditional GET for a small HTTP/1.1 server
//!
//! Responses to `GET` requests are fingerprinted and answered with
//! `304 Not Modified` when the client already holds the current version.

pub mod config;
pub mod etag;
pub mod handlers;
pub mod http;
pub mod middleware;
pub mod server;
