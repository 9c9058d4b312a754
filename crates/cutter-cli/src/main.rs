//! cutter - cookie cutter record validator
//!
//! # Examples
//!
//! ```bash
//! # Validate a record file
//! cutter validate record.json --pretty
//!
//! # Validate from stdin
//! echo '{"name":"Sales","type":"dashboard","project_type":"analytics","url":"http://x"}' | cutter validate
//!
//! # Export the schema
//! cutter schema
//! ```

use cutter_cli::{Cli, CliResult, execute, logger};
use cutter_config::{Config, LogLevel};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let pretty = match setup(&cli) {
        Ok(config) => cli.pretty || config.output.pretty,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match execute(&cli.command, pretty) {
        Ok(output) => {
            println!("{}", output.json);
            if output.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_INVALID)
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and validate configuration, then start logging
fn setup(cli: &Cli) -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    let level = cli
        .log_level
        .as_deref()
        .map(LogLevel::parse_or_default)
        .unwrap_or(config.logging.level);

    logger::initialize(level, config.log_file_path()?, config.logging.colored)?;

    info!("Starting cutter v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    Ok(config)
}
