//! JSON output formatting for ask command

use vaultchat_core::error::Result;
use vaultchat_core::session::AskOutcome;

/// Output in JSON format
pub fn output_json(outcome: &AskOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&to_json(outcome))?);
    Ok(())
}

pub(crate) fn to_json(outcome: &AskOutcome) -> serde_json::Value {
    let response = &outcome.response;
    let context_notes: Vec<_> = outcome
        .context_notes
        .iter()
        .map(|note| {
            serde_json::json!({
                "name": note.name(),
                "path": note.path().to_string_lossy(),
            })
        })
        .collect();

    serde_json::json!({
        "answer": response.answer,
        "references": response.references,
        "tokens": response.tokens,
        "latency_ms": response.latency_ms,
        "context_notes": context_notes,
    })
}
