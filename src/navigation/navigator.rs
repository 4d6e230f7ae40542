//! History-backed list/detail state machine.

use super::{History, HistoryEntry, Location, MemoryHistory};
use crate::view::View;

/// View state machine kept in step with a history stack.
///
/// Leaving a recipe always goes through the history (`back`), so the stack
/// stays the single source of truth for what is on screen.
#[derive(Debug)]
pub struct Navigator<H: History = MemoryHistory> {
    history: H,
    view: View,
    record_count: usize,
}

impl<H: History> Navigator<H> {
    /// Set up navigation for `record_count` records.
    ///
    /// A fragment naming a valid index opens that recipe directly, replacing
    /// the current history entry instead of pushing a new one. Anything else
    /// starts on the list.
    pub fn load(history: H, record_count: usize, fragment: Option<&str>) -> Self {
        let mut navigator = Self {
            history,
            view: View::List,
            record_count,
        };

        match fragment.map(|f| (f, Location::parse_fragment(f))) {
            Some((_, Some(index))) if index < record_count => {
                navigator.history.replace(HistoryEntry::recipe(index));
                navigator.show_detail(index, false);
                tracing::info!("Opened recipe {} from location", index);
            },
            Some((raw, _)) if !raw.trim().is_empty() => {
                tracing::warn!("Ignoring location fragment {:?}", raw);
            },
            _ => {},
        }

        navigator
    }

    /// The current view.
    pub fn view(&self) -> View {
        self.view
    }

    /// The underlying history.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Number of records that can be shown.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Location fragment of the current history entry.
    pub fn location(&self) -> String {
        self.history.current().fragment()
    }

    /// Open a recipe from the list. Returns false for an unknown index.
    pub fn select(&mut self, index: usize) -> bool {
        self.show_detail(index, true)
    }

    /// Show a recipe, pushing a history entry when `push` is set.
    ///
    /// No entry is pushed if the current one already encodes `index`, and
    /// `push == false` never touches the history.
    pub fn show_detail(&mut self, index: usize, push: bool) -> bool {
        if index >= self.record_count {
            tracing::warn!(
                "Recipe index {} out of range ({} records)",
                index,
                self.record_count
            );
            return false;
        }

        if push && self.history.current().recipe != Some(index) {
            self.history.push(HistoryEntry::recipe(index));
        }

        tracing::debug!("Showing recipe {}", index);
        self.view = View::Detail(index);
        true
    }

    fn show_list(&mut self) {
        tracing::debug!("Showing list");
        self.view = View::List;
    }

    /// Navigate back through the history.
    ///
    /// When a recipe is open but there is no earlier entry (for example after
    /// opening from a location fragment) the current entry becomes the list.
    pub fn back(&mut self) -> View {
        match self.history.back() {
            Some(entry) => self.handle_pop(entry),
            None => {
                if self.view.is_detail() {
                    self.history.replace(HistoryEntry::list());
                    self.show_list();
                }
                self.view
            },
        }
    }

    /// Navigate forward through the history.
    pub fn forward(&mut self) -> View {
        match self.history.forward() {
            Some(entry) => self.handle_pop(entry),
            None => self.view,
        }
    }

    /// React to a restored history entry without pushing.
    ///
    /// Entries with an out-of-range index fall back to the list.
    pub fn handle_pop(&mut self, entry: HistoryEntry) -> View {
        match entry.recipe {
            Some(index) if index < self.record_count => {
                self.show_detail(index, false);
            },
            Some(index) => {
                tracing::warn!("History entry for missing recipe {}", index);
                self.show_list();
            },
            None => self.show_list(),
        }
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(count: usize, fragment: Option<&str>) -> Navigator {
        Navigator::load(MemoryHistory::new(), count, fragment)
    }

    #[test]
    fn starts_on_list() {
        let nav = navigator(3, None);
        assert_eq!(nav.view(), View::List);
        assert_eq!(nav.location(), "");
        assert_eq!(nav.history().len(), 1);
    }

    #[test]
    fn fragment_opens_detail_without_push() {
        let mut nav = navigator(2, Some("1"));
        assert_eq!(nav.view(), View::Detail(1));
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.location(), "1");

        assert_eq!(nav.back(), View::List);
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.location(), "");
    }

    #[test]
    fn bad_fragment_falls_back_to_list() {
        for fragment in ["2", "#7", "abc", "", "-1"] {
            let nav = navigator(2, Some(fragment));
            assert_eq!(nav.view(), View::List, "fragment {fragment:?}");
            assert_eq!(nav.location(), "");
        }
    }

    #[test]
    fn select_pushes_and_back_pops() {
        let mut nav = navigator(3, None);
        assert!(nav.select(2));
        assert_eq!(nav.view(), View::Detail(2));
        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.location(), "2");

        assert_eq!(nav.back(), View::List);
        assert_eq!(nav.forward(), View::Detail(2));
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut nav = navigator(1, None);
        assert!(!nav.select(1));
        assert_eq!(nav.view(), View::List);
        assert_eq!(nav.history().len(), 1);
    }

    #[test]
    fn restoring_current_recipe_does_not_push() {
        let mut nav = navigator(3, None);
        nav.select(1);
        nav.show_detail(1, false);
        nav.show_detail(1, true);
        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.view(), View::Detail(1));
    }

    #[test]
    fn pop_events_drive_the_view() {
        let mut nav = navigator(2, None);
        assert_eq!(nav.handle_pop(HistoryEntry::recipe(0)), View::Detail(0));
        assert_eq!(nav.handle_pop(HistoryEntry::list()), View::List);
        assert_eq!(nav.handle_pop(HistoryEntry::recipe(9)), View::List);
        assert_eq!(nav.history().len(), 1);
    }

    #[test]
    fn back_on_list_with_no_history_stays_put() {
        let mut nav = navigator(2, None);
        assert_eq!(nav.back(), View::List);
        assert_eq!(nav.forward(), View::List);
    }

    #[test]
    fn selecting_after_back_discards_forward_entries() {
        let mut nav = navigator(3, None);
        nav.select(0);
        nav.back();
        nav.select(2);
        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.forward(), View::Detail(2));
        assert_eq!(nav.back(), View::List);
        assert_eq!(nav.back(), View::List);
    }

    #[test]
    fn empty_collection_never_leaves_list() {
        let mut nav = navigator(0, Some("0"));
        assert_eq!(nav.view(), View::List);
        assert!(!nav.select(0));
    }
}
