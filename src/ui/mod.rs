//! User interface rendering.

mod browser;
mod detail;
mod theme;

use crate::app::App;
use ratatui::{layout::Rect, Frame};
use unicode_width::UnicodeWidthStr;

pub use detail::fragment_lines;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    browser::draw_browser(f, app);
}

/// Row of the visible list under a screen position, if any.
pub fn list_row_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let [_, content, _, _] = browser::layout(area);

    // Inside the list block borders.
    let top = content.y + 1;
    let bottom = content.y + content.height.saturating_sub(1);
    let left = content.x + 1;
    let right = content.x + content.width.saturating_sub(1);

    if row >= top && row < bottom && column >= left && column < right {
        Some(usize::from(row - top))
    } else {
        None
    }
}

/// Whether a screen position is on the header back button.
///
/// The button is only drawn on the detail screen; callers check the view.
pub fn back_button_at(area: Rect, column: u16, row: u16) -> bool {
    let [header, _, _, _] = browser::layout(area);
    let width = u16::try_from(browser::BACK_LABEL.width()).unwrap_or(u16::MAX);
    let right = header.x.saturating_add(width.min(header.width));

    row == header.y && column >= header.x && column < right
}
