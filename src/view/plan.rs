//! Render instruction set for the list and detail screens.

use super::View;
use crate::data::Record;
use crate::format::{format_content, to_html, Fragment};

/// Header label shown on the list screen unless configured otherwise.
pub const DEFAULT_LIST_TITLE: &str = "Recipes";

/// A selectable entry on the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Index into the full record sequence.
    pub index: usize,
    /// Text shown for the entry.
    pub label: String,
}

/// Content of the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Index into the full record sequence.
    pub index: usize,
    /// Recipe name.
    pub title: String,
    /// Formatted body.
    pub fragments: Vec<Fragment>,
    /// Formatted body as HTML.
    pub markup: String,
}

/// The visible screen. Exactly one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Recipe list.
    List(Vec<ListEntry>),
    /// A single recipe.
    Detail(DetailView),
}

/// Everything a presentation layer needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Header label.
    pub header: String,
    /// Whether the back affordance is shown.
    pub back_visible: bool,
    /// Visible screen.
    pub screen: Screen,
}

impl RenderPlan {
    /// List entries, if the list is visible.
    pub fn entries(&self) -> Option<&[ListEntry]> {
        match &self.screen {
            Screen::List(entries) => Some(entries),
            Screen::Detail(_) => None,
        }
    }

    /// Detail content, if a recipe is visible.
    pub fn detail(&self) -> Option<&DetailView> {
        match &self.screen {
            Screen::Detail(detail) => Some(detail),
            Screen::List(_) => None,
        }
    }
}

/// List entries for every record not marked as skipped, in record order.
pub fn list_entries(records: &[Record]) -> Vec<ListEntry> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.is_listed())
        .map(|(index, record)| ListEntry {
            index,
            label: record.name.clone(),
        })
        .collect()
}

/// Build the render plan for `view`.
///
/// A detail view pointing past the end of `records` renders the list.
pub fn render(records: &[Record], view: View, list_title: &str) -> RenderPlan {
    if let Some((index, record)) = view
        .recipe()
        .and_then(|index| records.get(index).map(|record| (index, record)))
    {
        let fragments = format_content(&record.content);
        let markup = to_html(&fragments);
        return RenderPlan {
            header: record.name.clone(),
            back_visible: true,
            screen: Screen::Detail(DetailView {
                index,
                title: record.name.clone(),
                fragments,
                markup,
            }),
        };
    }

    RenderPlan {
        header: list_title.to_string(),
        back_visible: false,
        screen: Screen::List(list_entries(records)),
    }
}
