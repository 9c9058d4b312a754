use crate::DEFAULT_OUTPUT_PRETTY;

use serde::Deserialize;

/// How reports are written to stdout
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: DEFAULT_OUTPUT_PRETTY,
        }
    }
}
