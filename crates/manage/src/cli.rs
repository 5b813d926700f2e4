//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Management commands for the blog settings
#[derive(Parser, Debug)]
#[command(name = "manage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root used for the database file, static, media and templates.
    ///
    /// Defaults to the build workspace, or the current directory when the
    /// binary runs elsewhere. Set it explicitly for deployed binaries.
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `--base-dir` made absolute against the current directory
    pub fn absolute_base_dir(&self) -> std::io::Result<Option<PathBuf>> {
        match &self.base_dir {
            Some(dir) if dir.is_relative() => Ok(Some(std::env::current_dir()?.join(dir))),
            other => Ok(other.clone()),
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved settings
    Show(ShowArgs),

    /// Report insecure or incomplete configuration
    Check(CheckArgs),

    /// Inspect the database connection
    Database(DatabaseArgs),
}

/// Output formats for the show command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Severity at which the check command fails
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailLevel {
    Warning,
    Error,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Include deployment security checks
    #[arg(long)]
    pub deploy: bool,

    /// Exit non-zero when a message reaches this level
    #[arg(long, value_enum, default_value = "error")]
    pub fail_level: FailLevel,
}

/// Arguments for the database command
#[derive(Parser, Debug)]
pub struct DatabaseArgs {
    #[command(subcommand)]
    pub action: DatabaseAction,
}

/// Database actions
#[derive(Subcommand, Debug)]
pub enum DatabaseAction {
    /// Print the connection URL
    Url {
        /// Print the password instead of masking it
        #[arg(long)]
        show_password: bool,
    },
    /// Connect and run a trivial query
    Ping,
}
