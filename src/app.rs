//! Application state and logic.

use std::path::PathBuf;

use crate::clipboard;
use crate::config::{Config, Theme};
use crate::data::{Record, SourceReader};
use crate::navigation::{MemoryHistory, Navigator, SlideOut, Swipe, SwipeTracker};
use crate::view::{list_entries, render, ListEntry, ListState, RenderPlan, View};

/// Lines moved per detail scroll step.
const SCROLL_STEP: u16 = 5;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Recipe source path.
    pub source: PathBuf,
    /// Loaded records, fixed after load.
    records: Vec<Record>,
    /// Visible list entries, derived from the records.
    entries: Vec<ListEntry>,
    /// View and history state.
    navigator: Navigator<MemoryHistory>,
    /// List cursor and scroll state.
    pub list: ListState,
    /// Pending swipe.
    swipe: SwipeTracker,
    /// Running slide-out transition.
    slide: Option<SlideOut>,
    /// Header label for the list screen.
    pub list_title: String,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Error message from loading.
    pub error_message: Option<String>,
    animate: bool,
    slide_ticks: u16,
}

impl App {
    /// Create the application, reading recipes from the configured source.
    ///
    /// A source that cannot be read leaves the list empty and reports the
    /// failure in the status line.
    pub fn new(config: Config) -> Self {
        match SourceReader::read_book(&config.source, config.sort) {
            Ok(book) => {
                tracing::info!("Loaded {} recipes", book.records.len());
                Self::with_records(config, book.records)
            },
            Err(e) => {
                tracing::error!("Error loading recipes: {}", e);
                let message = format!("Failed to load recipes: {}", e);
                let mut app = Self::with_records(config, Vec::new());
                app.status = message.clone();
                app.error_message = Some(message);
                app
            },
        }
    }

    /// Create the application from already parsed records.
    pub fn with_records(config: Config, records: Vec<Record>) -> Self {
        let entries = list_entries(&records);
        let navigator = Navigator::load(
            MemoryHistory::new(),
            records.len(),
            config.fragment.as_deref(),
        );

        let mut app = Self {
            source: config.source,
            list: ListState::new(entries.len()),
            records,
            entries,
            navigator,
            swipe: SwipeTracker::new(config.swipe),
            slide: None,
            list_title: config.list_title,
            status: String::new(),
            theme: config.theme,
            error_message: None,
            animate: config.animate,
            slide_ticks: config.slide_ticks,
        };
        app.sync_cursor();
        app.status = app.default_status();
        app
    }

    /// All loaded records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Visible list entries.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// The current view.
    pub fn view(&self) -> View {
        self.navigator.view()
    }

    /// The navigation state machine.
    pub fn navigator(&self) -> &Navigator<MemoryHistory> {
        &self.navigator
    }

    /// Render instructions for the current state.
    pub fn plan(&self) -> RenderPlan {
        render(&self.records, self.view(), &self.list_title)
    }

    /// The record currently open, if any.
    pub fn current_record(&self) -> Option<&Record> {
        self.view().recipe().and_then(|index| self.records.get(index))
    }

    /// The list entry under the cursor.
    pub fn selected_entry(&self) -> Option<&ListEntry> {
        self.entries.get(self.list.cursor())
    }

    /// Progress of the running slide-out, if any.
    pub fn slide_progress(&self) -> Option<f64> {
        self.slide.map(|slide| slide.progress())
    }

    fn default_status(&self) -> String {
        match self.current_record() {
            Some(record) => format!("#{} {}", self.navigator.location(), record.name),
            None => format!("{} recipes", self.entries.len()),
        }
    }

    /// Keep the list cursor on the open recipe, if it is listed.
    fn sync_cursor(&mut self) {
        if let Some(index) = self.view().recipe() {
            if let Some(position) = self.entries.iter().position(|e| e.index == index) {
                self.list.set_cursor(position);
            }
        }
    }

    fn after_navigation(&mut self) {
        self.list.detail_scroll = 0;
        self.sync_cursor();
        self.status = self.default_status();
    }

    /// Open the recipe under the cursor.
    pub fn open_selected(&mut self) {
        if self.view().is_detail() {
            return;
        }

        let Some(index) = self.selected_entry().map(|entry| entry.index) else {
            self.status = "No recipes".to_string();
            return;
        };

        if self.navigator.select(index) {
            // A press that opened the recipe is not the start of a swipe.
            self.swipe.cancel();
            self.after_navigation();
        }
    }

    /// Open the recipe shown at `row` of the visible list area.
    pub fn open_row(&mut self, row: usize) {
        if self.view().is_detail() {
            return;
        }

        let position = self.list.scroll_offset() + row;
        if self.list.set_cursor(position) {
            self.open_selected();
        }
    }

    /// Go back through the history.
    pub fn back(&mut self) {
        self.slide = None;
        self.navigator.back();
        self.after_navigation();
    }

    /// Go forward through the history.
    pub fn forward(&mut self) {
        if self.slide.is_some() {
            return;
        }
        self.navigator.forward();
        self.after_navigation();
    }

    /// Record the start of a drag or touch.
    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.swipe.start(x, y);
    }

    /// Finish a drag or touch; a back swipe on a recipe leaves it.
    ///
    /// Returns true when a back swipe was recognized.
    pub fn touch_end(&mut self, x: f64, y: f64) -> bool {
        let swipe = self.swipe.end(x, y);
        if swipe != Some(Swipe::Back) || !self.view().is_detail() || self.slide.is_some() {
            return false;
        }

        tracing::debug!("Back swipe recognized");
        if self.animate && self.slide_ticks > 0 {
            self.slide = Some(SlideOut::new(self.slide_ticks));
        } else {
            self.back();
        }
        true
    }

    /// Advance timed state by one UI tick.
    pub fn tick(&mut self) {
        if let Some(slide) = self.slide.as_mut() {
            if slide.tick() {
                self.back();
            }
        }
    }

    /// Scroll the detail pane down.
    pub fn scroll_down(&mut self) {
        self.list.scroll_detail_down(SCROLL_STEP);
    }

    /// Scroll the detail pane up.
    pub fn scroll_up(&mut self) {
        self.list.scroll_detail_up(SCROLL_STEP);
    }

    /// Copy the open recipe to the clipboard.
    pub fn copy_current(&mut self) {
        let Some(record) = self.current_record() else {
            self.status = "No recipe open".to_string();
            return;
        };

        let status = match clipboard::copy_recipe(record) {
            Ok(()) => format!("Copied {}!", record.name),
            Err(e) => {
                tracing::warn!("Copy failed: {}", e);
                format!("Copy failed: {}", e)
            },
        };
        self.status = status;
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_records;
    use crate::navigation::History;

    const SOURCE: &str = "=== Bread\n- 500g flour\n=== Hidden [skip]\nx\n=== Soup\nBoil";

    fn app_with(config: Config) -> App {
        App::with_records(config, parse_records(SOURCE))
    }

    fn app() -> App {
        app_with(Config::default())
    }

    #[test]
    fn list_skips_hidden_records() {
        let app = app();
        let labels: Vec<&str> = app.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Bread", "Soup"]);
        assert_eq!(app.status, "2 recipes");
    }

    #[test]
    fn open_and_back() {
        let mut app = app();
        app.list.cursor_down();
        app.open_selected();
        assert_eq!(app.view(), View::Detail(2));
        assert_eq!(app.plan().header, "Soup");
        assert_eq!(app.status, "#2 Soup");

        app.back();
        assert_eq!(app.view(), View::List);
        assert_eq!(app.list.cursor(), 1);
        assert_eq!(app.plan().header, "Recipes");
    }

    #[test]
    fn open_row_uses_visible_position() {
        let mut app = app();
        app.open_row(1);
        assert_eq!(app.view(), View::Detail(2));

        app.back();
        app.open_row(5);
        assert_eq!(app.view(), View::List);
    }

    #[test]
    fn fragment_opens_recipe_and_back_returns_to_list() {
        let mut app = app_with(Config {
            fragment: Some("2".into()),
            ..Config::default()
        });
        assert_eq!(app.view(), View::Detail(2));
        assert_eq!(app.list.cursor(), 1);
        assert_eq!(app.navigator().history().len(), 1);

        app.back();
        assert_eq!(app.view(), View::List);
    }

    #[test]
    fn swipe_matches_back_navigation() {
        let mut swiped = app_with(Config {
            animate: false,
            ..Config::default()
        });
        swiped.open_selected();
        swiped.touch_start(0.0, 10.0);
        assert!(swiped.touch_end(100.0, 12.0));

        let mut backed = app();
        backed.open_selected();
        backed.back();

        assert_eq!(swiped.view(), backed.view());
        assert_eq!(swiped.plan(), backed.plan());
        assert_eq!(swiped.navigator().location(), backed.navigator().location());
    }

    #[test]
    fn animated_swipe_goes_back_after_slide() {
        let mut app = app_with(Config {
            slide_ticks: 2,
            ..Config::default()
        });
        app.open_selected();
        app.touch_start(0.0, 0.0);
        assert!(app.touch_end(20.0, 0.0));
        assert_eq!(app.view(), View::Detail(0));
        assert_eq!(app.slide_progress(), Some(0.0));

        app.tick();
        assert_eq!(app.view(), View::Detail(0));
        app.tick();
        assert_eq!(app.view(), View::List);
        assert_eq!(app.slide_progress(), None);
    }

    #[test]
    fn swipe_on_list_does_nothing() {
        let mut app = app();
        app.touch_start(0.0, 0.0);
        assert!(!app.touch_end(50.0, 0.0));
        assert_eq!(app.view(), View::List);
        assert_eq!(app.navigator().history().len(), 1);
    }

    #[test]
    fn press_that_opens_recipe_is_not_a_swipe() {
        let mut app = app();
        app.touch_start(5.0, 2.0);
        app.open_row(0);
        assert_eq!(app.view(), View::Detail(0));

        assert!(!app.touch_end(25.0, 2.0));
        assert_eq!(app.view(), View::Detail(0));
        assert_eq!(app.slide_progress(), None);
    }

    #[test]
    fn missing_source_degrades_to_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Config {
            source: dir.path().join("RECIPE"),
            ..Config::default()
        });
        assert!(app.records().is_empty());
        assert!(app.status.starts_with("Failed to load recipes"));
        assert!(app.error_message.is_some());

        app.open_selected();
        assert_eq!(app.view(), View::List);
        assert_eq!(app.status, "No recipes");
    }

    #[test]
    fn forward_reopens_recipe() {
        let mut app = app();
        app.open_selected();
        app.back();
        app.forward();
        assert_eq!(app.view(), View::Detail(0));
    }

    #[test]
    fn copy_without_recipe_reports_status() {
        let mut app = app();
        app.copy_current();
        assert_eq!(app.status, "No recipe open");
    }
}
