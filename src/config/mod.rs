//! Configuration loaded from `config.toml`.

mod credentials;
mod loader;
mod types;

pub use credentials::{SecureString, API_KEY_ENV};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, StorageConfig};
