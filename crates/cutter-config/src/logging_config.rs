use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, LogLevel,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored level names (ignored when logging to a file)
    pub colored: bool,
    /// Log file name inside `dir`. None = stderr.
    pub file: Option<String>,
    /// Log directory, relative to the config directory
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::logging(format!(
                "logging.dir must be relative and cannot contain '..', got {}",
                self.dir
            )));
        }

        if let Some(ref file) = self.file
            && (file.is_empty() || file.contains("..") || file.contains(['/', '\\']))
        {
            return Err(ConfigError::logging(format!(
                "logging.file must be a plain file name, got {file:?}"
            )));
        }

        Ok(())
    }
}
