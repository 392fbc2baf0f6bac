mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::StoreConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "GOMUN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".gomun";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SEED: bool = true;
