//! Drawing formatted recipe bodies as terminal lines.

use super::ThemeColors;
use crate::format::Fragment;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Convert formatted fragments into styled lines.
///
/// Quantities in a table are right-aligned to the widest one in that table.
pub fn fragment_lines(fragments: &[Fragment], colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut column = 0;

    for (i, fragment) in fragments.iter().enumerate() {
        match fragment {
            Fragment::TableOpen => {
                column = table_quantity_width(&fragments[i + 1..]);
            },
            Fragment::Row {
                quantity,
                description,
            } => {
                let pad = column.saturating_sub(quantity.width());
                let mut spans = vec![Span::raw("  ")];
                if column > 0 {
                    spans.push(Span::styled(
                        format!("{}{}  ", " ".repeat(pad), quantity),
                        Style::default()
                            .fg(colors.quantity)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                spans.push(Span::styled(
                    description.clone(),
                    Style::default().fg(colors.text),
                ));
                lines.push(Line::from(spans));
            },
            Fragment::TableClose => column = 0,
            Fragment::Heading(text) => {
                if !lines.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                )));
            },
            Fragment::Text(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(colors.text),
                )));
            },
        }
    }

    lines
}

/// Widest quantity among the rows up to the next table close.
fn table_quantity_width(rest: &[Fragment]) -> usize {
    rest.iter()
        .take_while(|f| !matches!(f, Fragment::TableClose))
        .filter_map(|f| match f {
            Fragment::Row { quantity, .. } => Some(quantity.width()),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}
