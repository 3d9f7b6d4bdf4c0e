//! `vaultchat search` command - list notes matching a query
//!
//! - metadata mode (default) matches note names, tags and section types
//! - content mode matches the raw note text
//! - at most 10 notes are listed, with the total number of matches

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use vaultchat_core::error::Result;
use vaultchat_core::search::SearchMode;
use vaultchat_core::session::Assistant;
use vaultchat_core::vault::NoteSource;

use self::format::{output_human, output_json};

/// Execute the search command
pub fn execute<S: NoteSource>(
    cli: &Cli,
    assistant: &Assistant<S>,
    query: &str,
    mode: SearchMode,
) -> Result<()> {
    let start = Instant::now();

    let results = assistant.perform_search(query, mode)?;

    if cli.verbose {
        debug!(
            query,
            %mode,
            total = results.total,
            shown = results.matches.len(),
            elapsed = ?start.elapsed(),
            "search"
        );
    }

    match cli.format {
        OutputFormat::Json => output_json(&results, mode)?,
        OutputFormat::Human => output_human(cli, &results),
    }

    Ok(())
}
