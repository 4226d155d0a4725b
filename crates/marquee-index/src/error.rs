//! Error types for index construction

use thiserror::Error;

/// Result type for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors that can occur while configuring an index
///
/// Lookups and insertions never fail; only configuration can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Table size must be at least one bucket
    #[error("Invalid table size: {size} (must be at least 1)")]
    InvalidTableSize {
        /// Rejected table size
        size: usize,
    },

    /// Hash scheme name not recognised
    #[error("Unknown hash scheme: {name} (expected 'stepwise' or 'reduce-once')")]
    UnknownHashScheme {
        /// Rejected scheme name
        name: String,
    },
}
