//! Navigation between the recipe list and recipe details.
//!
//! This module keeps the on-screen view in step with a history stack,
//! reads location fragments, and recognizes back swipes.

mod gesture;
mod history;
mod location;
mod navigator;

pub use gesture::{SlideOut, Swipe, SwipeThreshold, SwipeTracker};
pub use history::{History, HistoryEntry, MemoryHistory};
pub use location::Location;
pub use navigator::Navigator;
