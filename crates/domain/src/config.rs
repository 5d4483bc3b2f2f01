//! Application configuration structures
//!
//! The interesting part is [`RemoteConfig::is_configured`]: the whole service
//! runs against either the hosted backend or the local mock store, decided
//! once at startup purely from whether both remote values are present.

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub remote: RemoteConfig,
    pub local: LocalStoreConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address, e.g. `127.0.0.1:8080`
    pub bind_addr: String,
}

/// Hosted backend settings; both `url` and `key` must be present for remote
/// mode to engage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base endpoint URL of the hosted backend
    pub url: Option<String>,
    /// Access key sent with every request
    pub key: Option<String>,
    /// Object storage bucket for portfolio assets
    pub bucket: String,
}

/// Local mock store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalStoreConfig {
    /// Directory holding one JSON file per storage key
    pub data_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            remote: RemoteConfig::default(),
            local: LocalStoreConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: "127.0.0.1:8080".to_string() }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self { url: None, key: None, bucket: crate::constants::DEFAULT_BUCKET.to_string() }
    }
}

impl Default for LocalStoreConfig {
    fn default() -> Self {
        Self { data_dir: "./data".to_string() }
    }
}

impl RemoteConfig {
    /// Whether the hosted backend can be used at all
    ///
    /// True only when both the endpoint URL and the access key are present
    /// and non-empty after trimming. No network probing and no URL parsing
    /// happen here; a present-but-wrong value still selects remote mode.
    pub fn is_configured(&self) -> bool {
        fn present(value: Option<&str>) -> bool {
            value.is_some_and(|v| !v.trim().is_empty())
        }
        present(self.url.as_deref()) && present(self.key.as_deref())
    }
}

/// Which backend every data operation goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    /// Local JSON-file mock store
    Mock,
    /// Hosted row store + object store
    Remote,
}

impl BackendMode {
    /// Decide the backend from configuration; evaluated once at startup
    pub fn select(config: &AppConfig) -> Self {
        if config.remote.is_configured() {
            Self::Remote
        } else {
            Self::Mock
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Remote => "remote",
        }
    }
}
