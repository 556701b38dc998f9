//! Command-line interface argument parsing.
//!
//! The city, month and day are always chosen at the interactive prompts;
//! the flags here only configure where data comes from and how it is shown.

use clap::Parser;
use std::path::PathBuf;

/// Bikeshare - explore US bikeshare trip data
///
/// Pick a city (Chicago, New York City or Washington), optionally narrow
/// the trips to a month and day of the week, and get statistics on travel
/// times, stations, trip durations and users.
///
/// Examples:
///   bikeshare
///   bikeshare --data-dir ./data
///   bikeshare --page-size 10 --no-timings
///   bikeshare --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the city CSV files
    ///
    /// Overrides `[data] dir` from the config file.
    #[arg(short, long, value_name = "DIR", env = "BIKESHARE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .bikeshare.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of raw trip rows shown per page
    #[arg(long, value_name = "ROWS")]
    pub page_size: Option<usize>,

    /// Do not print how long each statistics section took
    #[arg(long)]
    pub no_timings: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only, no progress spinner)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .bikeshare.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.page_size == Some(0) {
            return Err("Page size must be at least 1".to_string());
        }

        if let Some(ref dir) = self.data_dir {
            if !dir.exists() {
                return Err(format!("Data directory does not exist: {}", dir.display()));
            }
            if !dir.is_dir() {
                return Err(format!("Data path is not a directory: {}", dir.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    ///
    /// Logs go to stderr next to the interactive prompts, so the default
    /// only shows warnings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
