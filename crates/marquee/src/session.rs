//! Lookup presentation and the interactive prompt loop.
//!
//! Everything here writes to a caller-supplied `Write` and reads from a
//! caller-supplied `BufRead`, so the binary wires in stdin/stdout while
//! tests use in-memory buffers.

use marquee_index::{HashIndex, IndexStats, Lookup};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Prompt printed before each interactive read
pub const PROMPT: &str = "Enter a movie (or blank to exit): ";

/// Write the post-load banner.
pub fn render_loaded<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "Read {count} entries.")
}

/// Write one lookup result block.
pub fn render_lookup<W: Write>(out: &mut W, lookup: &Lookup<'_>) -> io::Result<()> {
    writeln!(out, "Comparisons: {}", lookup.comparisons)?;
    match lookup.record {
        Some(record) => {
            writeln!(out, "Type: {}", record.category)?;
            writeln!(out, "Movie: {}", record.title)?;
            writeln!(out, "Director: {}", record.secondary)?;
            writeln!(out, "Country: {}", record.tertiary)?;
            writeln!(out, "Year of Release: {}", record.year)?;
            writeln!(out, "Duration: {} min", record.duration)
        }
        None => writeln!(out, "Not found in the hash table."),
    }
}

/// Write occupancy statistics as text or pretty JSON.
pub fn render_stats<W: Write>(out: &mut W, stats: &IndexStats, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, stats)?;
        writeln!(out)
    } else {
        writeln!(out, "{stats}")
    }
}

/// Totals for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lookups performed
    pub queries: usize,
    /// Lookups that found a record
    pub hits: usize,
    /// Sum of comparison counts over all lookups
    pub comparisons: usize,
}

impl SessionSummary {
    fn tally(&mut self, lookup: &Lookup<'_>) {
        self.queries += 1;
        self.comparisons += lookup.comparisons;
        if lookup.is_found() {
            self.hits += 1;
        }
    }
}

/// Read-only lookup session over a loaded index
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    index: &'a HashIndex,
}

impl<'a> Session<'a> {
    /// Create a session over `index`
    pub const fn new(index: &'a HashIndex) -> Self {
        Self { index }
    }

    /// Look up `title` and write its result block.
    pub fn query<W: Write>(&self, title: &str, out: &mut W) -> io::Result<Lookup<'a>> {
        let lookup = self.index.lookup(title);
        debug!(
            title,
            found = lookup.is_found(),
            comparisons = lookup.comparisons,
            "lookup"
        );
        render_lookup(out, &lookup)?;
        Ok(lookup)
    }

    /// Look up each title in turn.
    pub fn lookup_all<W, S>(&self, titles: &[S], out: &mut W) -> io::Result<SessionSummary>
    where
        W: Write,
        S: AsRef<str>,
    {
        let mut summary = SessionSummary::default();
        for title in titles {
            let lookup = self.query(title.as_ref(), out)?;
            summary.tally(&lookup);
        }
        Ok(summary)
    }

    /// Prompt for titles until a blank line or end of input.
    ///
    /// Only the line terminator is stripped; a line of spaces is looked up
    /// as-is.
    pub fn run<R, W>(&self, mut input: R, out: &mut W) -> io::Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = SessionSummary::default();
        let mut line = String::new();

        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            let read = input.read_line(&mut line)?;
            let title = line.trim_end_matches(['\n', '\r']);

            if read == 0 || title.is_empty() {
                writeln!(out, "Exiting...")?;
                break;
            }

            let lookup = self.query(title, out)?;
            summary.tally(&lookup);
        }

        Ok(summary)
    }
}
