//! cutter-cli library
//!
//! Command execution is exposed here so tests can drive it without a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod logger;
pub mod report;
pub mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, CliResult};
pub use input::InputSource;
pub use report::{ValidationReport, ViolationEntry};
pub use runner::{CommandOutput, execute};
