//! # marquee-index
//!
//! A fixed-size hash index over catalog records, keyed by title, with
//! separate chaining and per-lookup comparison accounting.
//!
//! ## Components
//!
//! - **Hashing**: polynomial hash (multiplier 31) over the raw key bytes,
//!   reduced modulo the table size either stepwise or once at the end
//! - **Storage**: one chain per bucket, entries held in an arena and linked
//!   by handle; new entries become the chain head
//! - **Lookup**: head-to-tail traversal counting every entry examined
//!
//! The table size is chosen at construction and never changes. There is no
//! rehashing and no removal; duplicate titles are allowed and the most
//! recently inserted one wins.
//!
//! Once populated the index is only read, so `&HashIndex` can be shared
//! across threads without locking.
//!
//! ## Quick Start
//!
//! ```rust
//! use marquee_index::{HashIndex, IndexConfig, Record};
//!
//! let mut index = HashIndex::new(IndexConfig::default());
//! index.insert(Record::new(
//!     "Movie",
//!     "Dick Johnson Is Dead",
//!     "Kirsten Johnson",
//!     "United States",
//!     2020,
//!     90,
//! ));
//!
//! let result = index.lookup("Dick Johnson Is Dead");
//! assert_eq!(result.comparisons, 1);
//! assert_eq!(result.record.map(|r| r.duration), Some(90));
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod config;
pub mod error;
pub mod hash;
pub mod index;
pub mod record;
pub mod stats;

pub use config::{DEFAULT_TABLE_SIZE, IndexConfig};
pub use error::{IndexError, Result};
pub use hash::HashScheme;
pub use index::{Chain, HashIndex, Lookup};
pub use record::Record;
pub use stats::IndexStats;
