//! Polynomial string hashing for bucket selection
//!
//! Keys are hashed over their raw UTF-8 bytes with multiplier 31. Two
//! reduction schemes are provided:
//!
//! - [`HashScheme::Stepwise`] reduces modulo the table size after every
//!   multiply-add. The accumulator never exceeds the table size, so the
//!   result equals the exact polynomial value modulo the table size.
//! - [`HashScheme::ReduceOnce`] accumulates with wrapping 64-bit
//!   arithmetic and reduces once at the end. For keys long enough to
//!   overflow 64 bits the two schemes diverge.
//!
//! Stepwise is the default and matches bucket placement of previously
//! published catalog output.

use crate::error::IndexError;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Polynomial multiplier
pub const MULTIPLIER: u64 = 31;

/// Reduction strategy used when mapping a key to a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HashScheme {
    /// Reduce modulo the table size after every byte
    #[default]
    Stepwise,
    /// Wrapping 64-bit accumulation, one reduction at the end
    ReduceOnce,
}

impl HashScheme {
    /// Map `key` to a bucket index in `[0, table_size)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee_index::HashScheme;
    /// use std::num::NonZeroUsize;
    ///
    /// let table_size = NonZeroUsize::new(1051).unwrap();
    /// assert_eq!(HashScheme::Stepwise.bucket("ab", table_size), 1003);
    /// assert_eq!(HashScheme::Stepwise.bucket("", table_size), 0);
    /// ```
    pub fn bucket(self, key: &str, table_size: NonZeroUsize) -> usize {
        match self {
            Self::Stepwise => stepwise(key.as_bytes(), table_size),
            Self::ReduceOnce => reduce_once(key.as_bytes(), table_size),
        }
    }

    /// Name accepted by [`FromStr`]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stepwise => "stepwise",
            Self::ReduceOnce => "reduce-once",
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashScheme {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stepwise" => Ok(Self::Stepwise),
            "reduce-once" | "reduce_once" => Ok(Self::ReduceOnce),
            _ => Err(IndexError::UnknownHashScheme {
                name: s.to_string(),
            }),
        }
    }
}

/// `acc = (acc * 31 + b) mod n` for every byte `b`.
pub fn stepwise(key: &[u8], table_size: NonZeroUsize) -> usize {
    // u128 keeps `acc * 31 + 255` exact for any usize modulus
    let modulus = table_size.get() as u128;
    let mut acc: u128 = 0;
    for &byte in key {
        acc = (acc * u128::from(MULTIPLIER) + u128::from(byte)) % modulus;
    }
    acc as usize
}

/// `acc = acc * 31 + b` (wrapping) for every byte, then `acc mod n`.
pub fn reduce_once(key: &[u8], table_size: NonZeroUsize) -> usize {
    let acc = key.iter().fold(0u64, |acc, &byte| {
        acc.wrapping_mul(MULTIPLIER).wrapping_add(u64::from(byte))
    });
    (acc % table_size.get() as u64) as usize
}
