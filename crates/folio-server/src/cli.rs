//! Command-line definitions for the `folio` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_core::config::CONFIG_ENV_VAR;

/// Folio - personal profile page server
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[command(about = "Serve or render a personal profile page", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<String>,

    /// Enable debug logging regardless of RUST_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// The subcommand to run; `serve` when none is given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Override `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Override `server.port`
        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch once and write the page as static HTML
    Render {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Inspect or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `folio config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `feed.timeout_secs`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value; booleans and numbers are detected
        value: String,
    },
    /// Write a default config file
    Init {
        /// Target file instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for docker
        #[arg(long)]
        docker_env: bool,
    },
}
