//! marquee binary entry point.
//!
//! A thin wrapper around the marquee library that:
//! 1. Initializes logging
//! 2. Parses and validates configuration
//! 3. Loads the catalog into a hash index
//! 4. Runs the selected command

use anyhow::{Context, Result};
use marquee::session::{render_loaded, render_stats};
use marquee::{CatalogLoader, CliConfig, Command, Session};
use marquee_index::HashIndex;
use std::io::{self, Write};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with lookup output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::from_args();
    tracing::debug!(
        "Configuration loaded: data={:?}, table_size={}, hash_scheme={}",
        config.data,
        config.table_size,
        config.hash_scheme
    );

    config.validate()?;

    let mut index = HashIndex::new(config.index_config()?);
    let count = CatalogLoader::load_into(&config.data, &mut index)
        .with_context(|| format!("loading {}", config.data.display()))?;

    if count == 0 {
        tracing::warn!("Catalog {} contained no records", config.data.display());
    }
    tracing::info!(
        records = count,
        table_size = index.table_size(),
        "Index populated"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.command() {
        Command::Repl => {
            render_loaded(&mut out, count)?;
            let stdin = io::stdin();
            let summary = Session::new(&index).run(stdin.lock(), &mut out)?;
            tracing::debug!(
                queries = summary.queries,
                hits = summary.hits,
                comparisons = summary.comparisons,
                "Session finished"
            );
        }
        Command::Lookup { titles } => {
            Session::new(&index).lookup_all(&titles, &mut out)?;
        }
        Command::Stats { json } => {
            render_stats(&mut out, &index.stats(), json)?;
        }
    }

    out.flush()?;
    Ok(())
}
