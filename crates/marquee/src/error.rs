//! Error types for catalog loading and host configuration.
//!
//! All errors use thiserror for consistent error handling across the codebase.

use marquee_index::IndexError;
use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading errors.
///
/// Loading stops at the first error; no partially populated index is
/// handed back to the caller.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Catalog could not be opened
    #[error("Failed to open catalog {path}: {source}")]
    SourceUnavailable {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Catalog could not be read after opening
    #[error("Failed to read catalog {path}: {source}")]
    SourceRead {
        /// Path to the catalog file, or `-` for an in-memory reader
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line does not match the catalog format
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },
}

/// Host configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Catalog file does not exist
    #[error("Catalog file not found: {}", .0.display())]
    MissingDataFile(PathBuf),

    /// Index parameters rejected
    #[error("Invalid index configuration: {0}")]
    Index(#[from] IndexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_error_messages() {
        let err = LoaderError::MalformedRecord {
            line: 3,
            reason: "expected 5 comma-separated fields, got 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed record on line 3: expected 5 comma-separated fields, got 2"
        );

        let err = LoaderError::SourceUnavailable {
            path: PathBuf::from("nflix.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("Failed to open catalog nflix.csv"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ConfigError = IndexError::InvalidTableSize { size: 0 }.into();
        assert!(err.to_string().contains("Invalid table size: 0"));

        let err = ConfigError::MissingDataFile(PathBuf::from("missing.csv"));
        assert_eq!(err.to_string(), "Catalog file not found: missing.csv");
    }
}
