//! Content formatting.
//!
//! Turns the loosely structured body of a recipe into fragments (quantity
//! tables, headings and text lines) that can be rendered as HTML markup or
//! drawn directly by the terminal UI.

mod escape;
mod markup;

pub use escape::escape_html;
pub use markup::{
    format_content, is_heading, is_list_line, parse_list_line, render_markup, to_html, Fragment,
};
