//! TCP accept loop and request routing.

pub mod listener;
pub mod router;

pub use router::Router;
