//! User actions: search the vault, ask a question about it
//!
//! An ask runs `Validating -> BuildingContext -> CallingRemote` and ends in an
//! answer or an error; nothing is retried. Only one ask may be in flight per
//! `Assistant`; a second one is refused with `Busy` until the first returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use serde::Serialize;

use crate::context::build_context;
use crate::error::{Result, VaultChatError};
use crate::note::NoteRef;
use crate::qa::{QaClient, QaResponse};
use crate::search::{
    search, validate_query, SearchMode, SearchResults, CONTEXT_NOTE_LIMIT, SEARCH_DISPLAY_LIMIT,
};
use crate::trace_time;
use crate::vault::NoteSource;

/// Result of an ask: the answer and the notes that grounded it
#[derive(Debug, Clone, Serialize)]
pub struct AskOutcome {
    pub response: QaResponse,
    pub context_notes: Vec<NoteRef>,
}

/// Phases of an ask, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AskPhase {
    Validating,
    BuildingContext,
    CallingRemote,
}

/// Entry points the presentation layer calls
pub struct Assistant<S: NoteSource> {
    source: S,
    client: QaClient,
    asking: AtomicBool,
}

/// Clears the in-flight flag when an ask finishes, however it finishes
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| VaultChatError::Busy)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: NoteSource> Assistant<S> {
    pub fn new(source: S, client: QaClient) -> Self {
        Self {
            source,
            client,
            asking: AtomicBool::new(false),
        }
    }

    /// True while an ask is in flight
    pub fn is_busy(&self) -> bool {
        self.asking.load(Ordering::Acquire)
    }

    /// Search the vault and return the first matches for display
    pub fn perform_search(&self, query: &str, mode: SearchMode) -> Result<SearchResults> {
        let query = validate_query(query, "search query")?;
        let notes = self.source.list_notes();
        Ok(search(
            query,
            &notes,
            &self.source,
            mode,
            SEARCH_DISPLAY_LIMIT,
        ))
    }

    /// Ask a question, using the notes matching `context_query` as context.
    ///
    /// An empty `context_query` sends the question on its own.
    pub fn perform_ask(
        &self,
        question: &str,
        context_query: &str,
        mode: SearchMode,
    ) -> Result<AskOutcome> {
        let start = Instant::now();
        tracing::debug!(phase = ?AskPhase::Validating, "ask");
        let question = validate_query(question, "question")?;
        self.client.ensure_configured()?;
        let _in_flight = InFlight::acquire(&self.asking)?;

        tracing::debug!(phase = ?AskPhase::BuildingContext, "ask");
        let context_query = context_query.trim();
        let (context, context_notes) = if context_query.is_empty() {
            (String::new(), Vec::new())
        } else {
            let notes = self.source.list_notes();
            let results = search(
                context_query,
                &notes,
                &self.source,
                mode,
                CONTEXT_NOTE_LIMIT,
            );
            let context = build_context(&self.source, &results.matches)?;
            (context, results.matches)
        };

        tracing::debug!(
            phase = ?AskPhase::CallingRemote,
            context_notes = context_notes.len(),
            "ask"
        );
        let response = self.client.ask(question, &context)?;

        trace_time!(start, "perform_ask");
        Ok(AskOutcome {
            response,
            context_notes,
        })
    }
}
