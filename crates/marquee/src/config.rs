//! Host configuration.
//!
//! Configuration comes from CLI arguments, environment variables, or
//! defaults, in that order of precedence:
//! - `--data` / `MARQUEE_DATA` (default `nflix.csv`)
//! - `--table-size` / `MARQUEE_TABLE_SIZE` (default 1051)
//! - `--hash-scheme` / `MARQUEE_HASH_SCHEME` (default `stepwise`)
//!
//! # Example
//!
//! ```no_run
//! use marquee::CliConfig;
//!
//! let config = CliConfig::from_args();
//! config.validate().expect("Invalid configuration");
//!
//! println!("Catalog: {}", config.data.display());
//! println!("Buckets: {}", config.table_size);
//! ```

use crate::error::ConfigError;
use clap::{Parser, Subcommand};
use marquee_index::{DEFAULT_TABLE_SIZE, HashScheme, IndexConfig};
use std::path::PathBuf;

/// Host configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "marquee",
    about = "Look up catalog titles in a chained hash index",
    version
)]
pub struct CliConfig {
    /// Catalog file to load
    #[arg(long, env = "MARQUEE_DATA", default_value = "nflix.csv")]
    pub data: PathBuf,

    /// Number of hash buckets
    #[arg(long, env = "MARQUEE_TABLE_SIZE", default_value_t = DEFAULT_TABLE_SIZE)]
    pub table_size: usize,

    /// Bucket reduction scheme: `stepwise` or `reduce-once`
    #[arg(long, env = "MARQUEE_HASH_SCHEME", default_value = "stepwise")]
    pub hash_scheme: HashScheme,

    /// What to do once the catalog is loaded (defaults to `repl`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Actions available after loading.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Prompt for titles until a blank line or end of input
    Repl,

    /// Look up the given titles and exit
    Lookup {
        /// Titles to look up, matched exactly
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Print bucket occupancy statistics
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl CliConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Selected command, `repl` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Repl)
    }

    /// Index parameters for this run.
    pub fn index_config(&self) -> Result<IndexConfig, ConfigError> {
        Ok(IndexConfig::new(self.table_size)?.with_hash_scheme(self.hash_scheme))
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The catalog file doesn't exist
    /// - The table size is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.data.exists() {
            return Err(ConfigError::MissingDataFile(self.data.clone()));
        }

        self.index_config()?;
        Ok(())
    }
}
