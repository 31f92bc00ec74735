//! CLI argument definitions using clap
//!
//! Commands:
//! - vitrine serve --config <path> [--port <port>]
//! - vitrine check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vitrine - a read-only catalog query service
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the catalog and start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./vitrine.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate the config and catalog file, print a summary, and exit
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./vitrine.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
