mod auth_config;
mod config;
mod database_config;
mod error;
mod image_access_policy;
mod log_level;
mod logging_config;
mod server_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use image_access_policy::ImageAccessPolicy;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

#[cfg(test)]
mod tests;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "DASH_CONFIG_DIR";
/// Environment variable overriding `storage.root`
pub const STORAGE_ROOT_ENV: &str = "DASH_STORAGE_ROOT";

const DEFAULT_CONFIG_DIRECTORY: &str = ".dash";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";

const DEFAULT_STORAGE_ROOT: &str = "storage";

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
