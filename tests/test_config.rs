use sentinel_etag::config::{Config, ETagConfig};

#[test]
fn test_config_default_address_and_env_override() {
    // Only test in this binary that touches the environment
    unsafe {
        std::env::remove_var("SENTINEL_CONFIG");
        std::env::remove_var("LISTEN");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.etag, ETagConfig::default());

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_config_default_etag_routes() {
    let etag = ETagConfig::default();

    assert!(etag.is_enabled_for("/health"));
    assert!(etag.is_enabled_for("/api/healthcheck"));
    assert!(!etag.is_enabled_for("/other"));
    assert!(!etag.preserve_cache_control);
}

#[test]
fn test_config_from_yaml_full() {
    let cfg = Config::from_yaml_str(
        r#"
listen_addr: "0.0.0.0:9000"
etag:
  routes: ["/api/healthcheck"]
  preserve_cache_control: true
"#,
    )
    .unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:9000");
    assert!(cfg.etag.is_enabled_for("/api/healthcheck"));
    assert!(!cfg.etag.is_enabled_for("/health"));
    assert!(cfg.etag.options().preserve_cache_control);
}

#[test]
fn test_config_from_yaml_partial_uses_defaults() {
    let cfg = Config::from_yaml_str("listen_addr: \"127.0.0.1:5000\"\n").unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:5000");
    assert_eq!(cfg.etag, ETagConfig::default());
}

#[test]
fn test_config_from_yaml_disable_all_routes() {
    let cfg = Config::from_yaml_str("etag:\n  routes: []\n").unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert!(!cfg.etag.is_enabled_for("/health"));
}

#[test]
fn test_config_from_yaml_rejects_bad_types() {
    assert!(Config::from_yaml_str("etag:\n  routes: 42\n").is_err());
}
