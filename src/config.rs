//! Server configuration.
//!
//! Loaded from an optional YAML file named by `SENTINEL_CONFIG`, with the
//! `LISTEN` environment variable taking precedence for the listen address.

use anyhow::Context;
use serde::Deserialize;

use crate::middleware::ETagOptions;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub etag: ETagConfig,
}

/// Which routes get conditional-GET handling, and how.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ETagConfig {
    /// Paths wrapped in the ETag middleware
    pub routes: Vec<String>,
    /// Keep `Cache-Control` on 304 responses
    pub preserve_cache_control: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            etag: ETagConfig::default(),
        }
    }
}

impl Default for ETagConfig {
    fn default() -> Self {
        Self {
            routes: vec!["/health".to_string(), "/api/healthcheck".to_string()],
            preserve_cache_control: false,
        }
    }
}

impl ETagConfig {
    pub fn is_enabled_for(&self, path: &str) -> bool {
        self.routes.iter().any(|r| r == path)
    }

    pub fn options(&self) -> ETagOptions {
        ETagOptions {
            preserve_cache_control: self.preserve_cache_control,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("SENTINEL_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path))?;
                Self::from_yaml_str(&raw)
                    .with_context(|| format!("Invalid config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
