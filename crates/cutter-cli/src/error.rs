use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that stop a command before it can produce a report
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] cutter_config::ConfigError),

    #[error("Failed to read {source_name}: {message} {location}")]
    Io {
        source_name: String,
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid document: {message} {location}")]
    Document {
        message: String,
        location: ErrorLocation,
        #[source]
        source: cutter_core::CoreError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Convert an IO error with the name of what was being read
    #[track_caller]
    pub fn from_io(source_name: impl Into<String>, err: std::io::Error) -> Self {
        CliError::Io {
            source_name: source_name.into(),
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert a core error raised while interpreting the document
    #[track_caller]
    pub fn from_core(err: cutter_core::CoreError) -> Self {
        CliError::Document {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create a logger error, naming the log file when there is one
    #[track_caller]
    pub fn logger(path: Option<&Path>, message: impl std::fmt::Display) -> Self {
        let message = match path {
            Some(path) => format!("{} ({})", message, path.display()),
            None => message.to_string(),
        };
        CliError::Logger {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CliError::from_json(err)
    }
}

impl From<cutter_core::CoreError> for CliError {
    #[track_caller]
    fn from(err: cutter_core::CoreError) -> Self {
        CliError::from_core(err)
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
