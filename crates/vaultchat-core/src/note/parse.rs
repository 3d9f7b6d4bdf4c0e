use std::sync::OnceLock;

use regex::Regex;

use super::frontmatter::{split_frontmatter, NoteFrontmatter};
use super::types::{NoteMetadata, SectionKind};

static INLINE_TAG: OnceLock<Regex> = OnceLock::new();
static INLINE_CODE: OnceLock<Regex> = OnceLock::new();
static ORDERED_ITEM: OnceLock<Regex> = OnceLock::new();

fn inline_tag_regex() -> &'static Regex {
    INLINE_TAG.get_or_init(|| {
        Regex::new(r"(?:^|[\s(\[,])#([\p{L}\p{N}_/\-]+)").expect("valid inline tag regex")
    })
}

fn inline_code_regex() -> &'static Regex {
    INLINE_CODE.get_or_init(|| Regex::new(r"`[^`]*`").expect("valid inline code regex"))
}

fn ordered_item_regex() -> &'static Regex {
    ORDERED_ITEM.get_or_init(|| Regex::new(r"^\d{1,9}[.)](\s|$)").expect("valid list regex"))
}

/// Build the metadata snapshot for one note's raw text
#[tracing::instrument(skip(content), level = "trace")]
pub fn extract_metadata(content: &str) -> NoteMetadata {
    let (yaml, body) = split_frontmatter(content);

    let mut tags = yaml
        .and_then(NoteFrontmatter::parse)
        .map(|fm| fm.tags())
        .unwrap_or_default();
    for tag in extract_inline_tags(body) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let mut section_types = Vec::new();
    if yaml.is_some() {
        section_types.push(SectionKind::Yaml.as_str().to_string());
    }
    section_types.extend(
        self::section_types(body)
            .into_iter()
            .map(|kind| kind.as_str().to_string()),
    );

    NoteMetadata {
        tags,
        section_types,
    }
}

/// Inline `#tags` in document order, outside code, each prefixed with `#`
pub fn extract_inline_tags(body: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut in_fence = false;

    for line in body.lines() {
        if is_fence(line) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        let line = inline_code_regex().replace_all(line, "");
        for caps in inline_tag_regex().captures_iter(&line) {
            let name = caps[1].trim_end_matches('/');
            // Pure numbers such as issue references are not tags
            if name.is_empty() || name.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let tag = format!("#{}", name);
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }

    tags
}

/// Classify the body into structural blocks, one label per block
pub fn section_types(body: &str) -> Vec<SectionKind> {
    let mut sections = Vec::new();
    let mut lines = body.lines().peekable();

    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }

        if is_fence(line) {
            let marker = &trimmed[..3];
            for inner in lines.by_ref() {
                if inner.trim_start().starts_with(marker) {
                    break;
                }
            }
            sections.push(SectionKind::Code);
            continue;
        }

        let kind = line_kind(line);
        match kind {
            SectionKind::Heading | SectionKind::ThematicBreak => {}
            SectionKind::Blockquote => {
                while lines
                    .peek()
                    .is_some_and(|next| next.trim_start().starts_with('>'))
                {
                    lines.next();
                }
            }
            SectionKind::Table => {
                while lines
                    .peek()
                    .is_some_and(|next| next.trim_start().starts_with('|'))
                {
                    lines.next();
                }
            }
            SectionKind::List => {
                // Items, their continuations and nested items belong to one list
                while lines.peek().is_some_and(|next| {
                    !next.trim().is_empty()
                        && (next.starts_with([' ', '\t']) || line_kind(next) == SectionKind::List)
                }) {
                    lines.next();
                }
            }
            _ => {
                while lines.peek().is_some_and(|next| {
                    !next.trim().is_empty()
                        && !is_fence(next)
                        && line_kind(next) == SectionKind::Paragraph
                }) {
                    lines.next();
                }
            }
        }
        sections.push(kind);
    }

    sections
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

fn line_kind(line: &str) -> SectionKind {
    let trimmed = line.trim_start();

    if is_heading(trimmed) {
        SectionKind::Heading
    } else if is_thematic_break(trimmed) {
        SectionKind::ThematicBreak
    } else if trimmed.starts_with('>') {
        SectionKind::Blockquote
    } else if trimmed.starts_with('|') {
        SectionKind::Table
    } else if is_list_item(trimmed) {
        SectionKind::List
    } else {
        SectionKind::Paragraph
    }
}

fn is_heading(trimmed: &str) -> bool {
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    (1..=6).contains(&level) && trimmed[level..].chars().next().map_or(true, char::is_whitespace)
}

fn is_thematic_break(trimmed: &str) -> bool {
    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|marker| compact.chars().all(|c| c == *marker))
}

fn is_list_item(trimmed: &str) -> bool {
    let bullet = ["- ", "* ", "+ "].iter().any(|b| trimmed.starts_with(b))
        || matches!(trimmed, "-" | "*" | "+");
    bullet || ordered_item_regex().is_match(trimmed)
}
