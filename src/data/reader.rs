//! Recipe source reading.

use super::{parse_records, sort_records, Record};
use crate::error::{RecipeError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path value that selects standard input.
pub const STDIN_SOURCE: &str = "-";

/// Information about a loaded recipe collection.
#[derive(Debug, Clone)]
pub struct RecipeBook {
    /// Where the records came from.
    pub source: PathBuf,
    /// Parsed records in display order.
    pub records: Vec<Record>,
}

/// Reader for recipe source files.
#[derive(Debug)]
pub struct SourceReader;

impl SourceReader {
    /// Read the raw text of a source. `-` reads standard input.
    pub fn read_text(path: &Path) -> Result<String> {
        if path == Path::new(STDIN_SOURCE) {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            return Ok(text);
        }

        std::fs::read_to_string(path).map_err(|e| RecipeError::source_read(path.to_path_buf(), e))
    }

    /// Read and parse a source, optionally sorting by name.
    pub fn read_book(path: &Path, sort: bool) -> Result<RecipeBook> {
        tracing::info!("Reading recipes from {}", path.display());
        let text = Self::read_text(path)?;
        Ok(Self::book_from_text(path, &text, sort))
    }

    /// Parse already loaded text into a book.
    pub fn book_from_text(path: &Path, text: &str, sort: bool) -> RecipeBook {
        let mut records = parse_records(text);
        if sort {
            sort_records(&mut records);
        }

        RecipeBook {
            source: path.to_path_buf(),
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_and_sorts_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "=== Zucchini\nslice\n=== Apple pie\nbake\n").unwrap();

        let book = SourceReader::read_book(file.path(), true).unwrap();
        assert_eq!(book.records.len(), 2);
        assert_eq!(book.records[0].name, "Apple pie");
        assert_eq!(book.source, file.path());
    }

    #[test]
    fn unsorted_keeps_source_order() {
        let book = SourceReader::book_from_text(Path::new("x"), "=== B\n=== A\n", false);
        assert_eq!(book.records[0].name, "B");
    }

    #[test]
    fn missing_file_is_source_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RECIPE");
        let err = SourceReader::read_book(&path, true).unwrap_err();
        assert!(matches!(err, RecipeError::SourceRead { .. }));
    }
}
