use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Identifier of a note inside a vault
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NoteRef {
    /// Path relative to the vault root
    pub path: PathBuf,
    /// Display name (file stem)
    pub name: String,
}

impl NoteRef {
    /// Build a reference from a vault-relative path; the name is the file stem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Metadata the host indexes for a note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteMetadata {
    /// Tags, each with a leading `#`, frontmatter tags first
    pub tags: Vec<String>,
    /// Structural block labels in document order
    pub section_types: Vec<String>,
}

/// One element of a vault snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub reference: NoteRef,
    pub metadata: NoteMetadata,
}

impl Note {
    pub fn new(reference: NoteRef, metadata: NoteMetadata) -> Self {
        Self {
            reference,
            metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.reference.name
    }

    pub fn path(&self) -> &Path {
        &self.reference.path
    }
}

/// Structural block kinds recognised in a note body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Yaml,
    Heading,
    Paragraph,
    List,
    Code,
    Blockquote,
    Table,
    ThematicBreak,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Yaml => "yaml",
            SectionKind::Heading => "heading",
            SectionKind::Paragraph => "paragraph",
            SectionKind::List => "list",
            SectionKind::Code => "code",
            SectionKind::Blockquote => "blockquote",
            SectionKind::Table => "table",
            SectionKind::ThematicBreak => "thematicBreak",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
