//! Cursor and scroll state for the list and detail screens.

/// Presentation state for browsing: list cursor plus scroll offsets.
///
/// The cursor indexes the visible list entries, not the record sequence.
#[derive(Debug, Default)]
pub struct ListState {
    /// Cursor position (index into visible entries).
    cursor: usize,
    /// Number of visible entries.
    len: usize,
    /// Scroll offset for the list.
    scroll_offset: usize,
    /// Scroll offset for the detail pane.
    pub detail_scroll: u16,
}

impl ListState {
    /// Create list state for `len` visible entries.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// Move the cursor up one position.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one position.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
    }

    /// Go to the first entry.
    pub fn goto_first(&mut self) {
        self.cursor = 0;
    }

    /// Go to the last entry.
    pub fn goto_last(&mut self) {
        self.cursor = self.len.saturating_sub(1);
    }

    /// Put the cursor on a visible position, if it exists.
    pub fn set_cursor(&mut self, position: usize) -> bool {
        if position < self.len {
            self.cursor = position;
            true
        } else {
            false
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of visible entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no visible entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adjust scroll to keep the cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }

        if self.cursor >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor.saturating_sub(viewport_height - 1);
        }
    }

    /// Current list scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scroll the detail pane down.
    pub fn scroll_detail_down(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(lines);
    }

    /// Scroll the detail pane up.
    pub fn scroll_detail_up(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }
}
