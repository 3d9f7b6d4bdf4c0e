//! Note search
//!
//! Two strategies, kept apart because they look at different data:
//! - metadata search matches the display name, section labels and tags
//! - content search matches the raw note text (or the display name)
//!
//! Both are case-insensitive substring filters. Results keep the snapshot's
//! enumeration order; there is no ranking.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::bail_validation;
use crate::error::{Result, VaultChatError};
use crate::note::{Note, NoteRef};
use crate::vault::NoteSource;

/// Maximum number of notes listed for a search
pub const SEARCH_DISPLAY_LIMIT: usize = 10;

/// Maximum number of notes used as context for a question
pub const CONTEXT_NOTE_LIMIT: usize = 5;

/// Which derived text a search scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Name, section labels and tags
    #[default]
    Metadata,
    /// Raw note content and name
    Content,
}

impl FromStr for SearchMode {
    type Err = VaultChatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metadata" | "tags" => Ok(SearchMode::Metadata),
            "content" | "text" => Ok(SearchMode::Content),
            other => Err(VaultChatError::validation(format!(
                "unknown search mode: {} (expected: metadata or content)",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Metadata => write!(f, "metadata"),
            SearchMode::Content => write!(f, "content"),
        }
    }
}

/// Matches of one search, truncated to a limit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    /// The first `limit` matches in enumeration order
    pub matches: Vec<NoteRef>,
    /// Number of matches before truncation
    pub total: usize,
}

impl SearchResults {
    fn from_matches(matches: Vec<NoteRef>, limit: usize) -> Self {
        let total = matches.len();
        let matches = matches.into_iter().take(limit).collect();
        Self { matches, total }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// True when more notes matched than were kept
    pub fn is_truncated(&self) -> bool {
        self.total > self.matches.len()
    }
}

/// Trim a user-entered query, rejecting it when nothing is left
pub fn validate_query<'a>(raw: &'a str, what: &str) -> Result<&'a str> {
    let query = raw.trim();
    if query.is_empty() {
        bail_validation!(format!("Please enter a {}", what));
    }
    Ok(query)
}

/// Lower-cased text the metadata search scans for one note
pub fn metadata_search_text(note: &Note) -> String {
    format!(
        "{} {} {}",
        note.name(),
        note.metadata.section_types.join(" "),
        note.metadata.tags.join(" ")
    )
    .to_lowercase()
}

/// Filter notes whose name, section labels or tags contain the query
#[tracing::instrument(skip(notes), fields(note_count = notes.len()))]
pub fn search_metadata(query: &str, notes: &[Note], limit: usize) -> SearchResults {
    let needle = query.to_lowercase();
    let matches: Vec<NoteRef> = notes
        .iter()
        .filter(|note| metadata_search_text(note).contains(&needle))
        .map(|note| note.reference.clone())
        .collect();

    tracing::debug!(total = matches.len(), limit, "metadata_search");
    SearchResults::from_matches(matches, limit)
}

/// Filter notes whose content or name contains the query
///
/// Notes that cannot be read are skipped rather than failing the search.
#[tracing::instrument(skip(notes, source), fields(note_count = notes.len()))]
pub fn search_content<S: NoteSource + ?Sized>(
    query: &str,
    notes: &[Note],
    source: &S,
    limit: usize,
) -> SearchResults {
    let needle = query.to_lowercase();
    let mut matches = Vec::new();

    for note in notes {
        if note.name().to_lowercase().contains(&needle) {
            matches.push(note.reference.clone());
            continue;
        }
        match source.read_content(&note.reference) {
            Ok(text) => {
                if text.to_lowercase().contains(&needle) {
                    matches.push(note.reference.clone());
                }
            }
            Err(e) => {
                tracing::warn!(note = %note.reference, error = %e, "skipping unreadable note");
            }
        }
    }

    tracing::debug!(total = matches.len(), limit, "content_search");
    SearchResults::from_matches(matches, limit)
}

/// Run a search in the given mode over a snapshot
pub fn search<S: NoteSource + ?Sized>(
    query: &str,
    notes: &[Note],
    source: &S,
    mode: SearchMode,
    limit: usize,
) -> SearchResults {
    match mode {
        SearchMode::Metadata => search_metadata(query, notes, limit),
        SearchMode::Content => search_content(query, notes, source, limit),
    }
}
