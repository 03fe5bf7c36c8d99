use sentinel_etag::etag::{TagKind, generate_etag};

const HEALTH_BODY: &[u8] = br#"{"healthy":"OK"}"#;

#[test]
fn test_fingerprint_known_digests() {
    // MD5("") and MD5("abc")
    assert_eq!(generate_etag("", b"").value(), "D41D8CD98F00B204E9800998ECF8427E");
    assert_eq!(generate_etag("abc", b"").value(), "900150983CD24FB0D6963F7D28E17F72");
    assert_eq!(generate_etag("", b"abc").value(), "900150983CD24FB0D6963F7D28E17F72");
}

#[test]
fn test_fingerprint_is_strong_uppercase_hex() {
    let tag = generate_etag("/health", HEALTH_BODY);

    assert_eq!(tag.kind(), TagKind::Strong);
    assert_eq!(tag.value().len(), 32);
    assert!(tag
        .value()
        .chars()
        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));

    let rendered = tag.to_string();
    assert_eq!(rendered.len(), 34);
    assert!(rendered.starts_with('"') && rendered.ends_with('"'));
}

#[test]
fn test_fingerprint_is_deterministic() {
    assert_eq!(generate_etag("/health", HEALTH_BODY), generate_etag("/health", HEALTH_BODY));
}

#[test]
fn test_fingerprint_changes_with_content() {
    assert_ne!(
        generate_etag("/health", HEALTH_BODY),
        generate_etag("/health", br#"{"healthy":"DEGRADED"}"#)
    );
}

#[test]
fn test_fingerprint_separates_keys() {
    assert_ne!(
        generate_etag("/health", HEALTH_BODY),
        generate_etag("/api/healthcheck", HEALTH_BODY)
    );
}

#[test]
fn test_fingerprint_key_content_boundary_is_not_encoded() {
    // Key and content are hashed back to back with no delimiter
    assert_eq!(generate_etag("a", b"bc"), generate_etag("ab", b"c"));
}

#[test]
fn test_fingerprint_matches_itself() {
    let tag = generate_etag("/health", HEALTH_BODY);

    assert!(tag.strong_match(&tag.to_string()));
    assert!(tag.weak_match(&tag.to_string()));
    assert!(tag.weak_match(&tag.to_string().to_lowercase()));
}
