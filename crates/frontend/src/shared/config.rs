use serde::Deserialize;
use std::time::Duration;

use contracts::shared::list::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};
use leptos::prelude::*;

use crate::system::auth::storage;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub cache: CacheConfig,
    pub notifications: NotificationConfig,
    pub lists: ListConfig,
    #[serde(default)]
    pub encryption: EncryptionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub port: u16,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    pub keep_unused_data_for_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub default_page: i64,
    pub default_limit: i64,
}

/// Base64 AES-256 key for personal fields. Absent in the embedded default.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct EncryptionConfig {
    pub key: Option<String>,
}

impl ClientConfig {
    pub fn keep_unused_for(&self) -> Duration {
        Duration::from_millis(self.cache.keep_unused_data_for_ms)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notifications.timeout_ms)
    }
}

impl ListConfig {
    /// Paging a list screen starts from
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.default_page, self.default_limit)
    }
}

/// Config provided by `App`; falls back to the defaults outside it.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>().unwrap_or_default()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/api/v1"

[cache]
keep_unused_data_for_ms = 60000

[notifications]
timeout_ms = 5000

[lists]
default_page = 1
default_limit = 10
"#;

/// localStorage key holding a TOML override, used against staging backends
const OVERRIDE_KEY: &str = "app_config";

/// Load client configuration
///
/// Search order:
/// 1. TOML stored under `app_config` in localStorage
/// 2. Falls back to embedded default config
pub fn load_config() -> Result<ClientConfig, toml::de::Error> {
    if let Some(contents) = stored_override() {
        match toml::from_str(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage '{}'", OVERRIDE_KEY);
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid '{}' override: {}", OVERRIDE_KEY, e),
        }
    }

    log::info!("Using default embedded configuration");
    toml::from_str(DEFAULT_CONFIG)
}

fn stored_override() -> Option<String> {
    storage::read_item(OVERRIDE_KEY)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                port: 3000,
                prefix: "/api/v1".to_string(),
            },
            cache: CacheConfig {
                keep_unused_data_for_ms: 60_000,
            },
            notifications: NotificationConfig { timeout_ms: 5_000 },
            lists: ListConfig {
                default_page: DEFAULT_PAGE,
                default_limit: DEFAULT_LIMIT,
            },
            encryption: EncryptionConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<ClientConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.keep_unused_for(), Duration::from_secs(60));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.lists.pagination(), Pagination::default());
    }

    #[test]
    fn test_encryption_key_is_read() {
        let contents = format!("{DEFAULT_CONFIG}\n[encryption]\nkey = \"c2VjcmV0\"\n");
        let config: ClientConfig = toml::from_str(&contents).unwrap();
        assert_eq!(config.encryption.key.as_deref(), Some("c2VjcmV0"));
        assert_eq!(ClientConfig::default().encryption.key, None);
    }

    #[test]
    fn test_partial_config_is_rejected() {
        let config: Result<ClientConfig, _> = toml::from_str("[api]\nport = 8080\n");
        assert!(config.is_err());
    }
}
