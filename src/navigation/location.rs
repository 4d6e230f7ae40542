//! Location fragment protocol.
//!
//! The fragment holds the zero-based index of the displayed recipe. A missing
//! or unparsable fragment means the list view.

/// Helpers for reading and writing location fragments.
#[derive(Debug)]
pub struct Location;

impl Location {
    /// Parse a fragment such as `"3"` or `"#3"` into a recipe index.
    pub fn parse_fragment(fragment: &str) -> Option<usize> {
        let digits = fragment.trim().trim_start_matches('#');
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Fragment text for a recipe index.
    pub fn fragment_for(index: usize) -> String {
        index.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Location::parse_fragment("1"), Some(1));
        assert_eq!(Location::parse_fragment("#12"), Some(12));
        assert_eq!(Location::parse_fragment(" #0 "), Some(0));
    }

    #[test]
    fn rejects_non_indices() {
        assert_eq!(Location::parse_fragment(""), None);
        assert_eq!(Location::parse_fragment("#"), None);
        assert_eq!(Location::parse_fragment("-1"), None);
        assert_eq!(Location::parse_fragment("+1"), None);
        assert_eq!(Location::parse_fragment("soup"), None);
        assert_eq!(Location::parse_fragment("99999999999999999999999"), None);
    }

    #[test]
    fn fragment_round_trips() {
        assert_eq!(Location::parse_fragment(&Location::fragment_for(7)), Some(7));
    }
}
