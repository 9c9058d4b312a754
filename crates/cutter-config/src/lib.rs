mod config;
mod error;
mod log_level;
mod logging_config;
mod output_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use output_config::OutputConfig;

pub const CONFIG_DIR_ENV: &str = "CUTTER_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".cutter";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = false;
const DEFAULT_OUTPUT_PRETTY: bool = false;
