//! Catalog record carried by the index

use std::fmt;

/// A single catalog entry.
///
/// `title` is the lookup key; the remaining fields are payload carried
/// alongside it and are never inspected by the index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Media type (e.g. "Movie", "TV Show")
    pub category: String,

    /// Title, used as the lookup key
    pub title: String,

    /// Director
    pub secondary: String,

    /// Country of production
    pub tertiary: String,

    /// Year of release
    pub year: i32,

    /// Running time in minutes
    pub duration: i32,
}

impl Record {
    /// Create a record from its six fields.
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        secondary: impl Into<String>,
        tertiary: impl Into<String>,
        year: i32,
        duration: i32,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            secondary: secondary.into(),
            tertiary: tertiary.into(),
            year,
            duration,
        }
    }

    /// The lookup key of this record.
    pub fn key(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.title, self.category, self.year)
    }
}
