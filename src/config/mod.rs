//! Configuration: TOML file, environment overrides and validation.

mod credentials;
mod loader;
mod types;

pub use credentials::ApiKey;
pub use loader::{ConfigError, API_KEY_ENV, BASE_URL_ENV};
pub use types::{ApiConfig, Config, UiConfig};
