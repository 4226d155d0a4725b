//! Occupancy statistics for a populated index

use crate::hash::HashScheme;
use crate::index::HashIndex;
use std::fmt;

/// Snapshot of bucket occupancy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndexStats {
    /// Number of buckets
    pub table_size: usize,
    /// Hash scheme in use
    pub hash_scheme: HashScheme,
    /// Number of inserted records
    pub entries: usize,
    /// Buckets holding at least one record
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// `entries / table_size`; unbounded since the table never grows
    pub load_factor: f64,
}

impl IndexStats {
    /// Average chain length over occupied buckets, or zero when empty
    pub fn mean_occupied_chain(&self) -> f64 {
        if self.occupied_buckets == 0 {
            0.0
        } else {
            self.entries as f64 / self.occupied_buckets as f64
        }
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table size: {}", self.table_size)?;
        writeln!(f, "Hash scheme: {}", self.hash_scheme)?;
        writeln!(f, "Entries: {}", self.entries)?;
        writeln!(f, "Occupied buckets: {}", self.occupied_buckets)?;
        writeln!(f, "Longest chain: {}", self.longest_chain)?;
        write!(f, "Load factor: {:.3}", self.load_factor)
    }
}

impl HashIndex {
    /// Compute occupancy statistics by walking every chain.
    pub fn stats(&self) -> IndexStats {
        let (occupied_buckets, longest_chain) = self
            .occupied_buckets()
            .map(|bucket| self.chain_len(bucket))
            .fold((0, 0), |(occupied, longest), len| {
                (occupied + 1, longest.max(len))
            });

        IndexStats {
            table_size: self.table_size(),
            hash_scheme: self.hash_scheme(),
            entries: self.len(),
            occupied_buckets,
            longest_chain,
            load_factor: self.len() as f64 / self.table_size() as f64,
        }
    }
}
