use serde::Deserialize;

/// The part of a note's YAML header that feeds the metadata index.
///
/// Every other key is ignored; vault notes carry arbitrary frontmatter.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NoteFrontmatter {
    /// `tags:` as a list or a comma/space separated string
    #[serde(default, alias = "tag")]
    tags: Option<serde_yaml::Value>,
}

impl NoteFrontmatter {
    /// Parse the YAML header, returning `None` when it is not valid YAML
    pub(crate) fn parse(yaml: &str) -> Option<Self> {
        if yaml.trim().is_empty() {
            return Some(Self::default());
        }
        match serde_yaml::from_str::<NoteFrontmatter>(yaml) {
            Ok(frontmatter) => Some(frontmatter),
            Err(e) => {
                tracing::debug!(error = %e, "unparseable frontmatter");
                None
            }
        }
    }

    /// Tags normalized to carry a single leading `#`
    pub(crate) fn tags(&self) -> Vec<String> {
        let raw: Vec<String> = match &self.tags {
            Some(serde_yaml::Value::Sequence(items)) => items
                .iter()
                .filter_map(|item| match item {
                    serde_yaml::Value::String(s) => Some(s.clone()),
                    serde_yaml::Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            Some(serde_yaml::Value::String(s)) => s
                .split(|c: char| c == ',' || c.is_whitespace())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        raw.iter()
            .map(|tag| tag.trim().trim_start_matches('#'))
            .filter(|tag| !tag.is_empty())
            .map(|tag| format!("#{}", tag))
            .collect()
    }
}

/// Split a note into its YAML header (without delimiters) and body.
///
/// A header only exists when the file opens with a `---` line and a closing
/// `---` line follows; otherwise the whole text is body.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    if let Some(body) = rest.strip_prefix("---") {
        return (Some(""), body.trim_start_matches(['\r', '\n']));
    }

    match rest.find("\n---") {
        Some(end_pos) => {
            let yaml = &rest[..end_pos];
            let after = &rest[end_pos + 4..];
            // The closing delimiter must stand on its own line
            let line_end = after.find('\n').unwrap_or(after.len());
            if !after[..line_end].trim().is_empty() {
                return (None, content);
            }
            let body = after[line_end..].trim_start_matches(['\r', '\n']);
            (Some(yaml), body)
        }
        None => (None, content),
    }
}
