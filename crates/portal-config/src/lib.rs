mod catalog_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
pub mod validation_config;

pub use catalog_config::CatalogConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "PORTAL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".portal";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_CACHE_DIR: &str = "session";
const DEFAULT_CACHE_FILE: &str = "identity.json";
const DEFAULT_SEED_DEMO_DATA: bool = true;
const DEFAULT_ENFORCE_CONTRIBUTOR_ROLE: bool = true;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
