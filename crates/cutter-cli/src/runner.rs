use crate::{CliResult, Commands, InputSource, ValidationReport};

use cutter_core::{RecordValidator, json_schema, ui_hints};

use log::info;
use serde::Serialize;

/// Rendered output of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub json: String,
    /// False only when `validate` rejected the record
    pub valid: bool,
}

/// Run a command and render its JSON output
pub fn execute(command: &Commands, pretty: bool) -> CliResult<CommandOutput> {
    match command {
        Commands::Validate { path } => {
            let source = InputSource::from_arg(path.as_deref());
            let document = source.read_document()?;
            let report = ValidationReport::from(RecordValidator::validate_value(&document)?);

            if report.valid {
                info!("{}: record is valid", source.describe());
            } else {
                info!(
                    "{}: record rejected with {} violation(s)",
                    source.describe(),
                    report.violations.len()
                );
            }

            Ok(CommandOutput {
                json: render(&report, pretty)?,
                valid: report.valid,
            })
        }
        Commands::Schema => Ok(CommandOutput {
            json: render(&json_schema(), pretty)?,
            valid: true,
        }),
        Commands::Hints => Ok(CommandOutput {
            json: render(&ui_hints(), pretty)?,
            valid: true,
        }),
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
