//! Catalog loading.
//!
//! Reads the comma-delimited catalog format into [`Record`]s:
//!
//! ```text
//! <category> <title>,<director>,<country>,<year>,<duration>
//! ```
//!
//! The category is the first whitespace-delimited token and exactly one
//! separator character after it is skipped. The remainder must hold five
//! comma-separated fields. Blank lines and `#` comments are ignored.

use crate::error::LoaderError;
use marquee_index::{HashIndex, Record};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Number of comma-separated fields after the category
const FIELD_COUNT: usize = 5;

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Parser for catalog sources
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse a complete catalog held in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::CatalogLoader;
    ///
    /// let content = "Movie Dick Johnson Is Dead,Kirsten Johnson,United States,2020,90\n\
    ///                Movie My Little Pony: A New Generation,Robert Cullen,,2021,91";
    ///
    /// let records = CatalogLoader::parse(content)?;
    /// assert_eq!(records.len(), 2);
    /// assert_eq!(records[0].title, "Dick Johnson Is Dead");
    /// assert_eq!(records[1].tertiary, "");
    /// assert_eq!(records[1].duration, 91);
    /// # Ok::<(), marquee::LoaderError>(())
    /// ```
    pub fn parse(content: &str) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if let Some(record) = Self::parse_line(line, index + 1)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Read a catalog from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Vec<Record>> {
        Self::read_records(reader, Path::new("-"))
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `LoaderError` if:
    /// - The file cannot be opened
    /// - Reading fails part way (including invalid UTF-8)
    /// - Any line is malformed
    pub fn from_file(path: &Path) -> Result<Vec<Record>> {
        let file = File::open(path).map_err(|source| LoaderError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let records = Self::read_records(BufReader::new(file), path)?;
        debug!(path = %path.display(), records = records.len(), "catalog loaded");
        Ok(records)
    }

    /// Load a catalog file and insert every record into `index` in file order.
    ///
    /// Nothing is inserted unless the whole file parses. Returns the number
    /// of records inserted.
    pub fn load_into(path: &Path, index: &mut HashIndex) -> Result<usize> {
        let records = Self::from_file(path)?;
        let count = records.len();
        index.extend(records);
        Ok(count)
    }

    fn read_records<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoaderError::SourceRead {
                path: PathBuf::from(path),
                source,
            })?;
            if let Some(record) = Self::parse_line(&line, index + 1)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Parse one catalog line.
    ///
    /// Returns `Ok(None)` for blank and comment lines. `line_number` is
    /// 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Record>> {
        let line = line.trim_start();
        if line.trim_end().is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let malformed = |reason: String| LoaderError::MalformedRecord {
            line: line_number,
            reason,
        };

        let (category, rest) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| malformed("missing fields after category".to_string()))?;

        let fields: Vec<&str> = rest.split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(malformed(format!(
                "expected {FIELD_COUNT} comma-separated fields, got {}",
                fields.len()
            )));
        }

        let year = Self::parse_number(fields[3], "year").map_err(malformed)?;
        let duration = Self::parse_number(fields[4], "duration").map_err(malformed)?;

        Ok(Some(Record::new(
            category, fields[0], fields[1], fields[2], year, duration,
        )))
    }

    fn parse_number(value: &str, field: &str) -> std::result::Result<i32, String> {
        value
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid {field} '{}'", value.trim()))
    }
}
