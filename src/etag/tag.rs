use std::fmt;
use std::str::FromStr;

/// Strength of an entity tag.
///
/// Strong tags claim byte-for-byte equivalence of the representation,
/// weak tags only claim semantic equivalence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Byte-exact validator
    Strong,
    /// Semantic validator
    Weak,
}

/// Errors produced when building or parsing an [`EntityTag`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityTagError {
    #[error("entity tag value must not be empty")]
    Empty,
    #[error("malformed entity tag: {0:?}")]
    Malformed(String),
}

/// A fingerprint of one version of a resource.
///
/// Serialized as `"value"` when strong and `W"value"` when weak. Note the weak
/// form has no slash after the `W`; incoming headers in the standard `W/"value"`
/// form are still understood by both comparison functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTag {
    kind: TagKind,
    value: String,
}

impl EntityTag {
    /// Creates a tag of the given kind.
    ///
    /// Returns [`EntityTagError::Empty`] if `value` is empty.
    pub fn new(kind: TagKind, value: impl Into<String>) -> Result<Self, EntityTagError> {
        let value = value.into();
        if value.is_empty() {
            return Err(EntityTagError::Empty);
        }
        Ok(Self { kind, value })
    }

    pub fn strong(value: impl Into<String>) -> Result<Self, EntityTagError> {
        Self::new(TagKind::Strong, value)
    }

    pub fn weak(value: impl Into<String>) -> Result<Self, EntityTagError> {
        Self::new(TagKind::Weak, value)
    }

    /// Wraps a freshly computed digest. Callers guarantee `value` is non-empty.
    pub(super) fn from_digest(value: String) -> Self {
        debug_assert!(!value.is_empty());
        Self {
            kind: TagKind::Strong,
            value,
        }
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_weak(&self) -> bool {
        self.kind == TagKind::Weak
    }

    /// Strong comparison, used for concurrency control (`If-Match`).
    ///
    /// Matches only when both sides are strong and the serialized form of
    /// `self` equals `other`, ignoring ASCII case.
    pub fn strong_match(&self, other: &str) -> bool {
        !has_weak_prefix(other)
            && self.kind == TagKind::Strong
            && self.to_string().eq_ignore_ascii_case(other)
    }

    /// Weak comparison, used for cache validation (`If-None-Match`).
    ///
    /// Strength markers are dropped from both sides before an ASCII
    /// case-insensitive comparison, so a strong and a weak tag with the same
    /// value match.
    pub fn weak_match(&self, other: &str) -> bool {
        let ours = self.to_string();
        let ours = if self.is_weak() {
            strip_weak_prefix(&ours)
        } else {
            ours.as_str()
        };

        ours.eq_ignore_ascii_case(strip_weak_prefix(other))
    }
}

/// See [`EntityTag::strong_match`].
pub fn strong_match(tag: &EntityTag, other: &str) -> bool {
    tag.strong_match(other)
}

/// See [`EntityTag::weak_match`].
pub fn weak_match(tag: &EntityTag, other: &str) -> bool {
    tag.weak_match(other)
}

fn has_weak_prefix(s: &str) -> bool {
    s.starts_with("W/") || s.starts_with("W\"")
}

/// Removes `W/` or a bare `W` in front of the opening quote.
fn strip_weak_prefix(s: &str) -> &str {
    if let Some(rest) = s.strip_prefix("W/") {
        rest
    } else if s.starts_with("W\"") {
        &s[1..]
    } else {
        s
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TagKind::Strong => write!(f, "\"{}\"", self.value),
            TagKind::Weak => write!(f, "W\"{}\"", self.value),
        }
    }
}

impl FromStr for EntityTag {
    type Err = EntityTagError;

    /// Parses `"v"`, `W"v"` or `W/"v"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let kind = if has_weak_prefix(s) {
            TagKind::Weak
        } else {
            TagKind::Strong
        };

        let value = strip_weak_prefix(s)
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .filter(|value| !value.contains('"'))
            .ok_or_else(|| EntityTagError::Malformed(s.to_string()))?;

        Self::new(kind, value)
    }
}
