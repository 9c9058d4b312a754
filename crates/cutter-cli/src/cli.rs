use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cutter")]
#[command(about = "Validate cookie cutter records and export their schema")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output (also enabled by output.pretty in config)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log level override: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}
