//! Human-readable output formatting for search command

use crate::cli::Cli;
use vaultchat_core::search::SearchResults;

/// Output in human-readable format
pub fn output_human(cli: &Cli, results: &SearchResults) {
    if results.is_empty() && cli.quiet {
        return;
    }
    print!("{}", render_human(results));
}

pub(crate) fn render_human(results: &SearchResults) -> String {
    if results.is_empty() {
        return "No notes found matching your search.\n".to_string();
    }

    let mut out = format!("Found {} notes:\n", results.total);
    for note in &results.matches {
        out.push_str(&format!("- {} ({})\n", note.name(), note.path().display()));
    }
    if results.is_truncated() {
        out.push_str(&format!("(showing first {})\n", results.matches.len()));
    }
    out
}
