//! Line classification and markup generation for recipe bodies.

use super::escape::escape_html;

/// Prefix that marks a list line.
const BULLET: &str = "- ";

/// One unit of formatted output.
///
/// Text is stored unescaped; escaping happens when markup is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Start of a quantity table.
    TableOpen,
    /// A quantity table row.
    Row {
        /// Leading numeric token, empty when the line has none.
        quantity: String,
        /// Everything after the quantity.
        description: String,
    },
    /// End of a quantity table.
    TableClose,
    /// A heading, without its trailing colon.
    Heading(String),
    /// A verbatim text line.
    Text(String),
}

impl Fragment {
    /// Whether this fragment is a generated block element rather than text.
    pub fn is_markup(&self) -> bool {
        !matches!(self, Fragment::Text(_))
    }

    /// Render this fragment as HTML.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Fragment::TableOpen => out.push_str("<table>"),
            Fragment::Row {
                quantity,
                description,
            } => {
                out.push_str("<tr><td>");
                out.push_str(&escape_html(quantity));
                out.push_str("</td><td>");
                out.push_str(&escape_html(description));
                out.push_str("</td></tr>");
            },
            Fragment::TableClose => out.push_str("</table>"),
            Fragment::Heading(text) => {
                out.push_str("<h3>");
                out.push_str(&escape_html(text));
                out.push_str("</h3>");
            },
            Fragment::Text(text) => out.push_str(&escape_html(text)),
        }
    }
}

/// Whether a line is a bullet line.
pub fn is_list_line(line: &str) -> bool {
    line.trim().starts_with(BULLET)
}

/// Whether a line is a heading: non-colon text followed by a single trailing colon.
pub fn is_heading(line: &str) -> bool {
    let trimmed = line.trim();
    match trimmed.strip_suffix(':') {
        Some(text) => !text.is_empty() && !text.contains(':'),
        None => false,
    }
}

/// Split a bullet line into quantity and description.
pub fn parse_list_line(line: &str) -> (String, String) {
    let item = line.trim().strip_prefix(BULLET).unwrap_or_default();

    if item.starts_with(|c: char| c.is_ascii_digit()) {
        if let Some((quantity, rest)) = item.split_once(' ') {
            return (quantity.to_string(), rest.trim_start_matches(' ').to_string());
        }
    }

    (String::new(), item.to_string())
}

/// Format recipe content into fragments in a single top-to-bottom pass.
///
/// Consecutive list lines form one table. Blank lines are dropped when they
/// follow a block element or an open table, or when the next line is a list
/// line or heading. Tables are always closed.
pub fn format_content(content: &str) -> Vec<Fragment> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut fragments = Vec::new();
    let mut in_table = false;

    for (i, line) in lines.iter().enumerate() {
        let is_list = is_list_line(line);

        if line.trim().is_empty() {
            let last_was_block = in_table || fragments.last().is_some_and(Fragment::is_markup);
            let next = lines.get(i + 1).copied().unwrap_or_default();
            let next_is_block = is_list_line(next) || is_heading(next);
            if last_was_block || next_is_block {
                continue;
            }
        }

        if is_list && !in_table {
            fragments.push(Fragment::TableOpen);
            in_table = true;
        } else if !is_list && in_table {
            fragments.push(Fragment::TableClose);
            in_table = false;
        }

        if is_list {
            let (quantity, description) = parse_list_line(line);
            fragments.push(Fragment::Row {
                quantity,
                description,
            });
        } else if is_heading(line) {
            let text = line.trim();
            fragments.push(Fragment::Heading(text[..text.len() - 1].to_string()));
        } else {
            fragments.push(Fragment::Text((*line).to_string()));
        }
    }

    if in_table {
        fragments.push(Fragment::TableClose);
    }

    fragments
}

/// Render fragments as HTML, one fragment per line.
pub fn to_html(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        fragment.write_html(&mut out);
    }
    out
}

/// Format content straight to HTML.
pub fn render_markup(content: &str) -> String {
    to_html(&format_content(content))
}
