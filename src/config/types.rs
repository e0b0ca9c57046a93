use serde::{Deserialize, Serialize};

use crate::config::credentials::ApiKey;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection settings for the remote figure collection.
///
/// Passed by value to [`crate::api::CatalogClient::new`]; nothing reads
/// these from global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base resource URL of the figures collection
    /// (e.g., "http://127.0.0.1:3000/api/figuras").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Static key sent in the `x-api-key` header.
    #[serde(default)]
    pub api_key: ApiKey,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000/api/figuras".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: ApiKey::new(api_key.into()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: ApiKey::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
