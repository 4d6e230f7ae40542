//! View state and render instructions.
//!
//! Rendering is a pure function of the records and the current [`View`];
//! any presentation layer can consume the resulting [`RenderPlan`].

mod list;
mod plan;

pub use list::ListState;
pub use plan::{list_entries, render, DetailView, ListEntry, RenderPlan, Screen, DEFAULT_LIST_TITLE};

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The list of recipes.
    #[default]
    List,
    /// One recipe, by index into the full record sequence.
    Detail(usize),
}

impl View {
    /// Whether a recipe is open.
    pub fn is_detail(self) -> bool {
        matches!(self, View::Detail(_))
    }

    /// Index of the open recipe.
    pub fn recipe(self) -> Option<usize> {
        match self {
            View::Detail(index) => Some(index),
            View::List => None,
        }
    }
}
