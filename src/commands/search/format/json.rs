//! JSON output formatting for search command

use vaultchat_core::error::Result;
use vaultchat_core::search::{SearchMode, SearchResults};

/// Output in JSON format
pub fn output_json(results: &SearchResults, mode: SearchMode) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&to_json(results, mode))?);
    Ok(())
}

pub(crate) fn to_json(results: &SearchResults, mode: SearchMode) -> serde_json::Value {
    let notes: Vec<_> = results
        .matches
        .iter()
        .map(|note| {
            serde_json::json!({
                "name": note.name(),
                "path": note.path().to_string_lossy(),
            })
        })
        .collect();

    serde_json::json!({
        "mode": mode,
        "total": results.total,
        "notes": notes,
    })
}
