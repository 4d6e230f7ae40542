//! Runtime configuration for the viewer.

use crate::navigation::SwipeThreshold;
use crate::view::DEFAULT_LIST_TITLE;
use std::path::PathBuf;

/// Default recipe source path.
pub const DEFAULT_SOURCE: &str = "RECIPE";

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Viewer settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Recipe source path (`-` for stdin).
    pub source: PathBuf,
    /// Initial location fragment.
    pub fragment: Option<String>,
    /// Header label for the list screen.
    pub list_title: String,
    /// Sort recipes by name.
    pub sort: bool,
    /// Play the slide-out transition before a swipe goes back.
    pub animate: bool,
    /// Length of the slide-out transition in UI ticks.
    pub slide_ticks: u16,
    /// Swipe recognition limits, in terminal cells.
    pub swipe: SwipeThreshold,
    /// Starting theme.
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            fragment: None,
            list_title: DEFAULT_LIST_TITLE.to_string(),
            sort: true,
            animate: true,
            slide_ticks: 6,
            swipe: SwipeThreshold::cells(),
            theme: Theme::default(),
        }
    }
}
