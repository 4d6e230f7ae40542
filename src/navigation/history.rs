//! Back-stack abstraction and an in-memory implementation.

use super::Location;

/// A history entry, optionally encoding the displayed recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryEntry {
    /// Index of the recipe shown for this entry, `None` for the list.
    pub recipe: Option<usize>,
}

impl HistoryEntry {
    /// Entry for the list view.
    pub fn list() -> Self {
        Self { recipe: None }
    }

    /// Entry for a recipe detail view.
    pub fn recipe(index: usize) -> Self {
        Self {
            recipe: Some(index),
        }
    }

    /// Location fragment for this entry (empty for the list).
    pub fn fragment(&self) -> String {
        self.recipe.map(Location::fragment_for).unwrap_or_default()
    }
}

/// Platform navigation history.
///
/// `back` and `forward` return the entry that became current, mirroring a
/// pop event; `None` means there was nowhere to go.
pub trait History {
    /// Add an entry after the current one, discarding any forward entries.
    fn push(&mut self, entry: HistoryEntry);
    /// Overwrite the current entry.
    fn replace(&mut self, entry: HistoryEntry);
    /// Step back one entry.
    fn back(&mut self) -> Option<HistoryEntry>;
    /// Step forward one entry.
    fn forward(&mut self) -> Option<HistoryEntry>;
    /// The current entry.
    fn current(&self) -> &HistoryEntry;
    /// Number of entries in the stack.
    fn len(&self) -> usize;

    /// Whether the stack has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// History kept in memory as a vector of entries and a cursor.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl MemoryHistory {
    /// Create a history holding a single list entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::list()],
            cursor: 0,
        }
    }

    /// Position of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, entry: HistoryEntry) {
        self.entries[self.cursor] = entry;
    }

    fn back(&mut self) -> Option<HistoryEntry> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor])
    }

    fn forward(&mut self) -> Option<HistoryEntry> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor])
    }

    fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_list_entry() {
        let history = MemoryHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(*history.current(), HistoryEntry::list());
        assert_eq!(history.current().fragment(), "");
    }

    #[test]
    fn back_and_forward() {
        let mut history = MemoryHistory::new();
        history.push(HistoryEntry::recipe(2));
        assert_eq!(history.current().fragment(), "2");

        assert_eq!(history.back(), Some(HistoryEntry::list()));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some(HistoryEntry::recipe(2)));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push(HistoryEntry::recipe(1));
        history.back();
        history.push(HistoryEntry::recipe(3));
        assert_eq!(
            history.entries(),
            &[HistoryEntry::list(), HistoryEntry::recipe(3)]
        );
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn replace_keeps_length() {
        let mut history = MemoryHistory::new();
        history.replace(HistoryEntry::recipe(4));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().recipe, Some(4));
    }
}
