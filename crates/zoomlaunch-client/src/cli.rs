//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::LogFormat;

/// zoomlaunch - launches Zoom meetings and stores meeting ids
#[derive(Debug, Parser)]
#[command(name = "zoomlaunch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "ZOOMLAUNCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the meeting JSON file (overrides the configuration)
    #[arg(long, short, env = "ZOOMLAUNCH_MEETINGS")]
    pub meetings: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Log output format (overrides the configuration)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show/list stored meeting(s) (default)
    Show {
        /// Meeting index to show
        #[arg(allow_negative_numbers = true)]
        index: Option<i64>,
    },

    /// Launch a meeting
    Launch {
        /// Index, meeting id or join URL
        #[arg(allow_hyphen_values = true)]
        target: String,

        /// Password (not needed with an index or URL)
        password: Option<String>,
    },

    /// Launch the meeting scheduled around now
    Next,

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Show configuration and meeting file paths
    Path,
}
