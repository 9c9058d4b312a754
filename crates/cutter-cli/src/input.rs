use crate::error::{CliError, CliResult};

use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

/// Where a record document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Map the optional path argument. No path or "-" means stdin.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            None => InputSource::Stdin,
            Some(path) if path == Path::new("-") => InputSource::Stdin,
            Some(path) => InputSource::File(path.to_path_buf()),
        }
    }

    /// Name used in log lines and error messages
    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    #[track_caller]
    pub fn read_to_string(&self) -> CliResult<String> {
        debug!("Reading record from {}", self.describe());

        match self {
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| CliError::from_io(self.describe(), e))?;
                Ok(buffer)
            }
            InputSource::File(path) => {
                std::fs::read_to_string(path).map_err(|e| CliError::from_io(self.describe(), e))
            }
        }
    }

    /// Read and parse the document as JSON
    #[track_caller]
    pub fn read_document(&self) -> CliResult<Value> {
        let text = self.read_to_string()?;
        parse_document(&text)
    }
}

#[track_caller]
pub fn parse_document(text: &str) -> CliResult<Value> {
    serde_json::from_str(text).map_err(CliError::from_json)
}
