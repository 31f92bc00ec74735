//! CLI module for vitrine
//!
//! Provides the command-line interface:
//! - serve: load the catalog and enter the HTTP serving loop
//! - check: validate the config and catalog file, print a summary

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command, serve};
pub use errors::{CliError, CliResult};
