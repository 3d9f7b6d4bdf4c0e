//! Human-readable output formatting for ask command

use crate::cli::Cli;
use vaultchat_core::session::AskOutcome;

/// Output in human-readable format
pub fn output_human(cli: &Cli, outcome: &AskOutcome) {
    print!("{}", render_human(outcome, !cli.quiet));
}

pub(crate) fn render_human(outcome: &AskOutcome, show_context: bool) -> String {
    let response = &outcome.response;
    let mut out = String::new();

    if show_context && !outcome.context_notes.is_empty() {
        let names: Vec<&str> = outcome.context_notes.iter().map(|n| n.name()).collect();
        out.push_str(&format!("Context: {}\n\n", names.join(", ")));
    }

    out.push_str("Answer:\n");
    out.push_str(response.answer.trim_end());
    out.push('\n');

    if !response.references.is_empty() {
        out.push_str("\nReferences:\n");
        for (i, reference) in response.references.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, reference.title));
            if !reference.url.is_empty() {
                out.push_str(&format!("   {}\n", reference.url));
            }
            if !reference.snippet.is_empty() {
                out.push_str(&format!("   {}\n", reference.snippet));
            }
        }
    }

    out.push_str(&format!(
        "\nTokens used: {} | Response time: {}ms\n",
        response.tokens, response.latency_ms
    ));
    out
}
