use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a record read from a JSON file or stdin
    Validate {
        /// JSON file to read; omit or pass "-" for stdin
        path: Option<PathBuf>,
    },
    /// Print the draft-07 JSON Schema for records
    Schema,
    /// Print form field hints derived from the schema
    Hints,
}
