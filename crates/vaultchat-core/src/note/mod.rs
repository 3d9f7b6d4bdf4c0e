//! Note model and metadata extraction
//!
//! A vault note is a markdown file. Search never looks at its body directly;
//! it works on the metadata snapshot built here: the display name, the tags
//! declared in frontmatter or inline, and the structural section labels.

mod frontmatter;
mod parse;
mod types;

pub use frontmatter::split_frontmatter;
pub use parse::{extract_inline_tags, extract_metadata, section_types};
pub use types::{Note, NoteMetadata, NoteRef, SectionKind};
