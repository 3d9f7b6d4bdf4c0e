//! `vaultchat ask` command - ask a question about the vault
//!
//! With `--context <query>`, the first five notes matching the query are
//! sent along with the question; without it the question goes out alone.

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use vaultchat_core::error::Result;
use vaultchat_core::search::SearchMode;
use vaultchat_core::session::Assistant;
use vaultchat_core::vault::NoteSource;

use self::format::{output_human, output_json};

/// Execute the ask command
pub fn execute<S: NoteSource>(
    cli: &Cli,
    assistant: &Assistant<S>,
    question: &str,
    context_query: &str,
    mode: SearchMode,
) -> Result<()> {
    let start = Instant::now();

    let outcome = assistant.perform_ask(question, context_query, mode)?;

    if cli.verbose {
        debug!(
            context_notes = outcome.context_notes.len(),
            tokens = outcome.response.tokens,
            elapsed = ?start.elapsed(),
            "ask"
        );
    }

    match cli.format {
        OutputFormat::Json => output_json(&outcome)?,
        OutputFormat::Human => output_human(cli, &outcome),
    }

    Ok(())
}
