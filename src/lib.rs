//! Recipe Viewer - browse a plain-text recipe collection in the terminal.
//!
//! A recipe file is a flat list of records, each introduced by a `===` line
//! whose remainder is the title. Bodies use two light conventions: bullet
//! lines (`- 2 eggs`) that become quantity tables, and `Heading:` lines.
//!
//! # Features
//!
//! - Record parsing with `[skip]` and `META:` title annotations
//! - Body formatting to HTML markup or styled terminal lines
//! - List/detail navigation backed by a history stack
//! - Location fragments to open a recipe directly
//! - Swipe-to-go-back with a slide-out transition
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use recipe_viewer::data::parse_records;
//! use recipe_viewer::format::render_markup;
//!
//! let records = parse_records("=== Omelette\n- 2 eggs\n- salt\nSteps:\nWhisk");
//! assert_eq!(records[0].name, "Omelette");
//!
//! let html = render_markup(&records[0].content);
//! assert!(html.starts_with("<table>\n<tr><td>2</td><td>eggs</td></tr>"));
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod navigation;
pub mod ui;
pub mod view;

pub use error::{RecipeError, Result};
