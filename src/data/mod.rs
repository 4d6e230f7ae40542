//! Recipe data: records, parsing and source reading.

mod parser;
mod reader;
mod record;

pub use parser::{parse_records, sort_key, sort_records, DELIMITER};
pub use reader::{RecipeBook, SourceReader, STDIN_SOURCE};
pub use record::{Record, META_MARKER, SKIP_TAG};
