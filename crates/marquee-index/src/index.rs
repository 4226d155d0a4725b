//! Fixed-size hash index with chained buckets
//!
//! Entries live in a single arena and are linked by handle: each bucket
//! stores the handle of its chain head and each entry the handle of its
//! successor. New entries are prepended, so traversal order is newest
//! first. The table never grows and entries are never removed.

use crate::config::IndexConfig;
use crate::hash::HashScheme;
use crate::record::Record;
use tracing::trace;

/// Handle of an entry in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntryId(usize);

/// A chained entry: one record plus the handle of the next entry in its bucket
#[derive(Debug, Clone)]
struct Entry {
    record: Record,
    next: Option<EntryId>,
}

/// Outcome of a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a> {
    /// Matching record, if any
    pub record: Option<&'a Record>,
    /// Number of entries examined, including the match
    pub comparisons: usize,
}

impl<'a> Lookup<'a> {
    /// Whether a record was found
    pub const fn is_found(&self) -> bool {
        self.record.is_some()
    }

    /// Split into `(record, comparisons)`
    pub const fn into_parts(self) -> (Option<&'a Record>, usize) {
        (self.record, self.comparisons)
    }
}

/// Chained hash index keyed by record title.
///
/// # Examples
///
/// ```
/// use marquee_index::{HashIndex, IndexConfig, Record};
///
/// let mut index = HashIndex::new(IndexConfig::new(11)?);
/// index.insert(Record::new("Movie", "Alpha", "A. Director", "Norway", 2019, 95));
/// index.insert(Record::new("Movie", "Epsilon", "E. Director", "Chile", 2021, 88));
///
/// // "Alpha" and "Epsilon" share a bucket; the newer entry is the chain head.
/// let found = index.lookup("Alpha");
/// assert_eq!(found.record.map(|r| r.year), Some(2019));
/// assert_eq!(found.comparisons, 2);
///
/// let missing = index.lookup("Gamma");
/// assert!(missing.record.is_none());
/// assert_eq!(missing.comparisons, 0);
/// # Ok::<(), marquee_index::IndexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HashIndex {
    config: IndexConfig,
    heads: Vec<Option<EntryId>>,
    entries: Vec<Entry>,
}

impl HashIndex {
    /// Create an empty index with every bucket pre-allocated.
    pub fn new(config: IndexConfig) -> Self {
        Self {
            config,
            heads: vec![None; config.table_size()],
            entries: Vec::new(),
        }
    }

    /// Create an index and insert `records` in order.
    pub fn from_records<I>(config: IndexConfig, records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut index = Self::new(config);
        index.extend(records);
        index
    }

    /// Configuration the index was built with
    pub const fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Number of buckets
    pub const fn table_size(&self) -> usize {
        self.config.table_size()
    }

    /// Hash scheme used for bucket selection
    pub const fn hash_scheme(&self) -> HashScheme {
        self.config.hash_scheme()
    }

    /// Number of inserted records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bucket that `key` maps to
    pub fn bucket_of(&self, key: &str) -> usize {
        self.config
            .hash_scheme()
            .bucket(key, self.config.table_size_nonzero())
    }

    /// Insert a record as the new head of its bucket's chain.
    ///
    /// Duplicate titles are kept; the most recent insertion shadows older
    /// ones for [`lookup`](Self::lookup).
    pub fn insert(&mut self, record: Record) {
        let bucket = self.bucket_of(&record.title);
        let id = EntryId(self.entries.len());
        trace!(title = %record.title, bucket, "inserting record");

        let next = self.heads[bucket].replace(id);
        self.entries.push(Entry { record, next });
    }

    /// Find the first record in `key`'s chain whose title equals `key`.
    ///
    /// Every visited entry counts as one comparison. An empty bucket
    /// yields no record and zero comparisons; a miss on a non-empty bucket
    /// reports the full chain length.
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        let mut comparisons = 0;
        for record in self.chain(self.bucket_of(key)) {
            comparisons += 1;
            if record.title == key {
                return Lookup {
                    record: Some(record),
                    comparisons,
                };
            }
        }

        Lookup {
            record: None,
            comparisons,
        }
    }

    /// Shorthand for `lookup(key).record`
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.lookup(key).record
    }

    /// Records in `bucket`, head first. Out-of-range buckets are empty.
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            entries: &self.entries,
            cursor: self.heads.get(bucket).copied().flatten(),
        }
    }

    /// Number of records chained in `bucket`
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.chain(bucket).count()
    }

    /// All records in insertion order
    pub fn records(&self) -> impl ExactSizeIterator<Item = &Record> + '_ {
        self.entries.iter().map(|entry| &entry.record)
    }

    pub(crate) fn occupied_buckets(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.heads.len()).filter(|&bucket| self.heads[bucket].is_some())
    }
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}

impl Extend<Record> for HashIndex {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        for record in records {
            self.insert(record);
        }
    }
}

/// Iterator over one bucket's chain, newest entry first
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    entries: &'a [Entry],
    cursor: Option<EntryId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.cursor?.0)?;
        self.cursor = entry.next;
        Some(&entry.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, year: i32) -> Record {
        Record::new("Movie", title, "Director", "Country", year, 90)
    }

    fn small_index() -> HashIndex {
        HashIndex::new(IndexConfig::new(11).unwrap())
    }

    #[test]
    fn test_empty_index_lookup() {
        let index = small_index();
        assert!(index.is_empty());
        for key in ["", "Alpha", "anything"] {
            let result = index.lookup(key);
            assert_eq!(result.record, None);
            assert_eq!(result.comparisons, 0);
        }
    }

    #[test]
    fn test_collision_chain_order() {
        // Alpha and Epsilon hash to bucket 7 of 11; Beta to bucket 5.
        let mut index = small_index();
        index.insert(record("Alpha", 2001));
        index.insert(record("Beta", 2002));
        index.insert(record("Epsilon", 2003));

        assert_eq!(index.bucket_of("Alpha"), 7);
        assert_eq!(index.bucket_of("Epsilon"), 7);
        assert_eq!(index.bucket_of("Beta"), 5);

        let (found, comparisons) = index.lookup("Epsilon").into_parts();
        assert_eq!(found.map(|r| r.year), Some(2003));
        assert_eq!(comparisons, 1);

        let (found, comparisons) = index.lookup("Alpha").into_parts();
        assert_eq!(found.map(|r| r.year), Some(2001));
        assert_eq!(comparisons, 2);

        let (found, comparisons) = index.lookup("Beta").into_parts();
        assert_eq!(found.map(|r| r.year), Some(2002));
        assert_eq!(comparisons, 1);
    }

    #[test]
    fn test_miss_counts_whole_chain() {
        let mut index = small_index();
        index.insert(record("Beta", 2002));

        // Delta shares bucket 5 with Beta
        let result = index.lookup("Delta");
        assert!(!result.is_found());
        assert_eq!(result.comparisons, 1);

        // Gamma lands in empty bucket 4
        let result = index.lookup("Gamma");
        assert!(!result.is_found());
        assert_eq!(result.comparisons, 0);
    }

    #[test]
    fn test_duplicate_titles_most_recent_wins() {
        let mut index = small_index();
        index.insert(record("Alpha", 1999));
        index.insert(record("Alpha", 2024));

        let result = index.lookup("Alpha");
        assert_eq!(result.record.map(|r| r.year), Some(2024));
        assert_eq!(result.comparisons, 1);
        assert_eq!(index.len(), 2);
        assert_eq!(index.chain_len(index.bucket_of("Alpha")), 2);
    }

    #[test]
    fn test_insert_touches_only_one_bucket() {
        let mut index = small_index();
        index.insert(record("Zeta", 1));
        index.insert(record("Theta", 2));
        index.insert(record("Iota", 3));

        let chain: Vec<&str> = index.chain(0).map(|r| r.title.as_str()).collect();
        assert_eq!(chain, vec!["Iota", "Theta", "Zeta"]);
        for bucket in 1..index.table_size() {
            assert_eq!(index.chain_len(bucket), 0);
        }
    }

    #[test]
    fn test_empty_string_key() {
        let mut index = small_index();
        assert_eq!(index.lookup("").comparisons, 0);

        index.insert(record("", 2000));
        let result = index.lookup("");
        assert_eq!(result.record.map(|r| r.year), Some(2000));
        assert_eq!(result.comparisons, 1);
    }

    #[test]
    fn test_exact_match_only() {
        let mut index = small_index();
        index.insert(record("Alpha", 2001));
        assert!(index.get("alpha").is_none());
        assert!(index.get("Alpha ").is_none());
        assert!(index.get("Alpha").is_some());
    }

    #[test]
    fn test_chain_out_of_range_is_empty() {
        let mut index = small_index();
        index.insert(record("Alpha", 2001));
        assert_eq!(index.chain(11).count(), 0);
        assert_eq!(index.chain_len(usize::MAX), 0);
    }

    #[test]
    fn test_extend_and_records_preserve_insertion_order() {
        let index = HashIndex::from_records(
            IndexConfig::new(11).unwrap(),
            vec![record("Alpha", 1), record("Beta", 2), record("Gamma", 3)],
        );
        let titles: Vec<&str> = index.records().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_reduce_once_scheme_changes_placement() {
        let config = IndexConfig::default().with_hash_scheme(HashScheme::ReduceOnce);
        let mut index = HashIndex::new(config);
        index.insert(record("Dick Johnson Is Dead", 2020));

        assert_eq!(index.bucket_of("Dick Johnson Is Dead"), 172);
        assert_eq!(index.lookup("Dick Johnson Is Dead").comparisons, 1);
    }
}
