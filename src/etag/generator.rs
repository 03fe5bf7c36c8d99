use md5::{Digest, Md5};

use crate::etag::tag::EntityTag;

/// Computes a strong entity tag for `content` served under `key`.
///
/// The tag is the MD5 digest of the key bytes followed directly by the content
/// bytes, rendered as 32 uppercase hex characters. The key namespaces the
/// content so identical bodies at different paths get different tags.
///
/// MD5 is used as a fast, well distributed checksum here, not as a security
/// primitive. The concatenation has no delimiter, so `("a", b"bc")` and
/// `("ab", b"c")` produce the same tag. Keys are request paths, which makes
/// such collisions unlikely in practice.
///
/// # Example
///
/// ```
/// # use sentinel_etag::etag::generate_etag;
/// let tag = generate_etag("/health", br#"{"healthy":"OK"}"#);
/// assert_eq!(tag.value().len(), 32);
/// assert_eq!(tag, generate_etag("/health", br#"{"healthy":"OK"}"#));
/// ```
pub fn generate_etag(key: &str, content: &[u8]) -> EntityTag {
    let mut hasher = Md5::new();
    hasher.update(key.as_bytes());
    hasher.update(content);

    EntityTag::from_digest(hex::encode_upper(hasher.finalize()))
}
