//! Catalog title lookup.
//!
//! This crate hosts the pieces around the [`marquee_index`] core:
//! - `loader`: parses the comma-delimited catalog into records
//! - `config`: CLI and environment configuration
//! - `session`: result rendering and the interactive prompt loop
//! - `error`: loader and configuration error types
//!
//! # Example
//!
//! ```no_run
//! use marquee::{CatalogLoader, CliConfig, Session};
//! use marquee_index::HashIndex;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = CliConfig::from_args();
//!     config.validate()?;
//!
//!     let mut index = HashIndex::new(config.index_config()?);
//!     CatalogLoader::load_into(&config.data, &mut index)?;
//!
//!     let stdin = std::io::stdin();
//!     Session::new(&index).run(stdin.lock(), &mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod config;
pub mod error;
pub mod loader;
pub mod session;

pub use config::{CliConfig, Command};
pub use error::{ConfigError, LoaderError};
pub use loader::CatalogLoader;
pub use session::{Session, SessionSummary};
