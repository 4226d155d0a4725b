//! Index construction parameters

use crate::error::{IndexError, Result};
use crate::hash::HashScheme;
use std::num::NonZeroUsize;

/// Default number of buckets
pub const DEFAULT_TABLE_SIZE: usize = 1051;

/// Construction-time configuration for a [`HashIndex`](crate::HashIndex).
///
/// Both values are fixed for the lifetime of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    table_size: NonZeroUsize,
    hash_scheme: HashScheme,
}

impl IndexConfig {
    /// Create a configuration with the default hash scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee_index::{IndexConfig, IndexError};
    ///
    /// let config = IndexConfig::new(11)?;
    /// assert_eq!(config.table_size(), 11);
    ///
    /// assert!(IndexConfig::new(0).is_err());
    /// # Ok::<(), IndexError>(())
    /// ```
    pub fn new(table_size: usize) -> Result<Self> {
        let table_size = NonZeroUsize::new(table_size)
            .ok_or(IndexError::InvalidTableSize { size: table_size })?;
        Ok(Self {
            table_size,
            hash_scheme: HashScheme::default(),
        })
    }

    /// Replace the hash scheme.
    #[must_use]
    pub const fn with_hash_scheme(mut self, hash_scheme: HashScheme) -> Self {
        self.hash_scheme = hash_scheme;
        self
    }

    /// Number of buckets
    pub const fn table_size(&self) -> usize {
        self.table_size.get()
    }

    pub(crate) const fn table_size_nonzero(&self) -> NonZeroUsize {
        self.table_size
    }

    /// Hash scheme used for bucket selection
    pub const fn hash_scheme(&self) -> HashScheme {
        self.hash_scheme
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            table_size: NonZeroUsize::new(DEFAULT_TABLE_SIZE).unwrap_or(NonZeroUsize::MIN),
            hash_scheme: HashScheme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndexConfig::default();
        assert_eq!(config.table_size(), DEFAULT_TABLE_SIZE);
        assert_eq!(config.hash_scheme(), HashScheme::Stepwise);
    }

    #[test]
    fn test_zero_table_size_rejected() {
        assert_eq!(
            IndexConfig::new(0),
            Err(IndexError::InvalidTableSize { size: 0 })
        );
    }

    #[test]
    fn test_with_hash_scheme() {
        let config = IndexConfig::new(7)
            .unwrap()
            .with_hash_scheme(HashScheme::ReduceOnce);
        assert_eq!(config.table_size(), 7);
        assert_eq!(config.hash_scheme(), HashScheme::ReduceOnce);
    }
}
