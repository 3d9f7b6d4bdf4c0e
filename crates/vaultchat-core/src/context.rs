//! Context assembly
//!
//! Turns a list of matched notes into the text blob sent alongside a
//! question. Each note becomes one `## <name>` section holding its full text.

use std::thread;
use std::time::Instant;

use crate::error::{Result, VaultChatError};
use crate::note::NoteRef;
use crate::trace_time;
use crate::vault::NoteSource;

/// Render one note as a context section
pub fn render_section(name: &str, content: &str) -> String {
    format!("## {}\n{}\n\n", name, content)
}

/// Concatenate the content of `matches`, in order, into one context blob.
///
/// Reads run concurrently on scoped threads; results are gathered by input
/// position, so completion order never affects the output. Any failed read
/// aborts the whole assembly.
#[tracing::instrument(skip(source, matches), fields(note_count = matches.len()))]
pub fn build_context<S: NoteSource + ?Sized>(source: &S, matches: &[NoteRef]) -> Result<String> {
    if matches.is_empty() {
        return Ok(String::new());
    }

    let start = Instant::now();

    let contents: Vec<Result<String>> = thread::scope(|scope| {
        let handles: Vec<_> = matches
            .iter()
            .map(|note| scope.spawn(move || source.read_content(note)))
            .collect();

        handles
            .into_iter()
            .zip(matches)
            .map(|(handle, note)| {
                handle.join().unwrap_or_else(|_| {
                    Err(VaultChatError::content_retrieval(note, "reader thread panicked"))
                })
            })
            .collect()
    });

    let mut context = String::new();
    for (note, content) in matches.iter().zip(contents) {
        context.push_str(&render_section(note.name(), &content?));
    }

    trace_time!(start, "build_context", bytes = context.len());
    Ok(context)
}
