//! Entity tags.
//!
//! - **`tag`**: the [`EntityTag`] model with strong and weak comparison
//! - **`generator`**: content fingerprinting that produces strong tags
//!
//! # Comparison
//!
//! | ETag     | Incoming | Strong   | Weak     |
//! |----------|----------|----------|----------|
//! | `W"1"`   | `W"1"`   | no match | match    |
//! | `W"1"`   | `W"2"`   | no match | no match |
//! | `W"1"`   | `"1"`    | no match | match    |
//! | `"1"`    | `"1"`    | match    | match    |

pub mod generator;
pub mod tag;

pub use generator::generate_etag;
pub use tag::{EntityTag, EntityTagError, TagKind, strong_match, weak_match};
