//! Note repository access
//!
//! `NoteSource` is the seam between the core and whatever hosts the notes.
//! `FsVault` is the directory-backed host used by the CLI: it walks the vault
//! once, keeps a metadata snapshot, and reads note content on demand.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, VaultChatError};
use crate::map_read_err;
use crate::note::{extract_metadata, Note, NoteMetadata, NoteRef};
use crate::trace_time;

const NOTE_EXTENSION: &str = "md";

/// Read access to a note collection.
///
/// Implementations must be shareable across threads: context assembly reads
/// several notes at once.
pub trait NoteSource: Sync {
    /// Immutable snapshot of every note, in the host's enumeration order
    fn list_notes(&self) -> Vec<Note>;

    /// Full text of a note
    fn read_content(&self, note: &NoteRef) -> Result<String>;

    /// Indexed metadata for a note (empty when the note is unknown)
    fn metadata(&self, note: &NoteRef) -> NoteMetadata;
}

/// A vault backed by a directory of markdown files
#[derive(Debug)]
pub struct FsVault {
    root: PathBuf,
    notes: Vec<Note>,
    index: HashMap<PathBuf, usize>,
}

impl FsVault {
    /// Open a vault and build its metadata snapshot
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(VaultChatError::VaultNotFound {
                path: root.to_path_buf(),
            });
        }

        let start = Instant::now();
        let mut notes = Vec::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable vault entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }

            let relative = match entry.path().strip_prefix(root) {
                Ok(relative) => relative.to_path_buf(),
                Err(_) => continue,
            };

            // A note the host cannot read is still listed, with empty metadata
            let metadata = match fs::read_to_string(entry.path()) {
                Ok(content) => extract_metadata(&content),
                Err(e) => {
                    tracing::warn!(path = %relative.display(), error = %e, "failed to index note");
                    NoteMetadata::default()
                }
            };

            notes.push(Note::new(NoteRef::new(relative), metadata));
        }

        let index = notes
            .iter()
            .enumerate()
            .map(|(i, note)| (note.reference.path.clone(), i))
            .collect();

        tracing::debug!(note_count = notes.len(), "vault_indexed");
        trace_time!(start, "open_vault");

        Ok(Self {
            root: root.to_path_buf(),
            notes,
            index,
        })
    }
}

impl NoteSource for FsVault {
    fn list_notes(&self) -> Vec<Note> {
        self.notes.clone()
    }

    fn read_content(&self, note: &NoteRef) -> Result<String> {
        fs::read_to_string(self.root.join(&note.path)).map_err(|e| map_read_err!(note, e))
    }

    fn metadata(&self, note: &NoteRef) -> NoteMetadata {
        self.index
            .get(&note.path)
            .map(|&i| self.notes[i].metadata.clone())
            .unwrap_or_default()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(NOTE_EXTENSION))
}
