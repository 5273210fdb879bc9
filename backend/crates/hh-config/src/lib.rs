mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

pub const CONFIG_DIR_ENV: &str = "HH_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".hh";
const CONFIG_FILENAME: &str = "config.toml";

// Session
const DEFAULT_STORAGE_KEY: &str = "helpingHandsUser";
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
const DEFAULT_PROFILE_DELAY_MS: u64 = 500;
const MAX_SIMULATED_DELAY_MS: u64 = 30_000;
const MAX_STORAGE_KEY_LENGTH: usize = 64;

// Api
const DEFAULT_API_LATENCY_MS: u64 = 500;
const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
