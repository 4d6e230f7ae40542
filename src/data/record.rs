//! Recipe record type.

use super::parser::DELIMITER;

/// Tag in a title that hides the record from the list.
pub const SKIP_TAG: &str = "[skip]";

/// Annotation that starts the metadata suffix of a title.
pub const META_MARKER: &str = "META:";

/// A single recipe parsed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Title line as written in the source, trimmed.
    pub title: String,
    /// Display name with annotation markers removed.
    pub name: String,
    /// Body text, trimmed of surrounding blank lines.
    pub content: String,
    /// Hidden from the list view.
    pub skip: bool,
    /// Text following a `META:` annotation in the title.
    pub meta: Option<String>,
}

impl Record {
    /// Build a record from its title line and body.
    pub fn new(title: &str, content: impl Into<String>) -> Self {
        let title = title.trim();
        let skip = title.contains(SKIP_TAG);

        let without_skip = title.replace(SKIP_TAG, " ");
        let (name, meta) = match without_skip.find(META_MARKER) {
            Some(pos) => {
                let meta = without_skip[pos + META_MARKER.len()..].trim();
                let meta = (!meta.is_empty()).then(|| meta.to_string());
                (collapse_spaces(&without_skip[..pos]), meta)
            },
            None => (collapse_spaces(&without_skip), None),
        };

        Self {
            title: title.to_string(),
            name,
            content: content.into(),
            skip,
            meta,
        }
    }

    /// Whether the record shows up in the list view.
    pub fn is_listed(&self) -> bool {
        !self.skip
    }

    /// Reassemble the record in source form.
    pub fn to_source(&self) -> String {
        if self.content.is_empty() {
            format!("{} {}\n", DELIMITER, self.title)
        } else {
            format!("{} {}\n{}\n", DELIMITER, self.title, self.content)
        }
    }
}

/// Trim and join words with single spaces.
fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
