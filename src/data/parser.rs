//! Splitting raw recipe text into records.

use super::Record;
use regex::Regex;
use std::sync::OnceLock;

/// Line prefix that introduces a record.
pub const DELIMITER: &str = "===";

fn delimiter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The trailing whitespace class also eats the line break, so a bare
    // delimiter line takes its title from the next line.
    RE.get_or_init(|| Regex::new(r"(?m)^===\s*").expect("delimiter pattern is valid"))
}

/// Parse raw text into records, in source order.
///
/// Fragments that are blank are dropped. The first line of each fragment is
/// the title and the remaining lines, trimmed, are the content. Text with no
/// delimiter yields at most one record.
pub fn parse_records(text: &str) -> Vec<Record> {
    let records: Vec<Record> = delimiter_regex()
        .split(text)
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            let (title, body) = part.split_once('\n').unwrap_or((part, ""));
            Record::new(title, body.trim())
        })
        .collect();

    tracing::debug!("Parsed {} records", records.len());
    records
}

/// Normalized comparison key: ASCII letters only, lowercased.
pub fn sort_key(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Sort records alphabetically by [`sort_key`], keeping source order on ties.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_cached_key(|record| sort_key(&record.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_records() {
        let records = parse_records("=== A\nfoo\n=== B\nbar");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[0].content, "foo");
        assert_eq!(records[1].name, "B");
        assert_eq!(records[1].content, "bar");
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(parse_records("").is_empty());
        assert!(parse_records("  \n\n ").is_empty());
    }

    #[test]
    fn text_without_delimiter_is_one_record() {
        let records = parse_records("Loose notes\nline two");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Loose notes");
        assert_eq!(records[0].content, "line two");
    }

    #[test]
    fn leading_text_becomes_its_own_record() {
        let records = parse_records("preface\n=== A\nfoo");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "preface");
        assert_eq!(records[1].name, "A");
    }

    #[test]
    fn missing_body_gives_empty_content() {
        let records = parse_records("=== Only a title\n=== Next\nbody");
        assert_eq!(records[0].content, "");
        assert_eq!(records[1].content, "body");
    }

    #[test]
    fn internal_blank_lines_are_kept() {
        let records = parse_records("=== A\n\n\nfirst\n\nsecond\n\n");
        assert_eq!(records[0].content, "first\n\nsecond");
    }

    #[test]
    fn bare_delimiter_takes_title_from_next_line() {
        let records = parse_records("===\nSoup\nwater");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Soup");
        assert_eq!(records[0].content, "water");
    }

    #[test]
    fn delimiter_must_start_the_line() {
        let records = parse_records("=== A\nx === y\n=== B\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].content, "x === y");
    }

    #[test]
    fn crlf_titles_are_trimmed() {
        let records = parse_records("=== A\r\nfoo\r\n=== B\r\nbar\r\n");
        assert_eq!(records[0].name, "A");
        assert_eq!(records[1].name, "B");
        assert_eq!(records[1].content, "bar");
    }

    #[test]
    fn round_trip_up_to_whitespace() {
        let source = "=== Pancakes\n- 2 eggs\n- flour\n\nMix well\n=== Tea [skip]\nSteep\n";
        let records = parse_records(source);
        let rebuilt: String = records.iter().map(Record::to_source).collect();
        assert_eq!(rebuilt, source);
        assert_eq!(parse_records(&rebuilt), records);
    }

    #[test]
    fn sort_key_drops_non_letters() {
        assert_eq!(sort_key("1. Apple-Pie!"), "applepie");
        assert_eq!(sort_key("Crème"), "crme");
    }

    #[test]
    fn sort_is_case_insensitive_and_stable() {
        let mut records = parse_records("=== banana\n=== 2 Apple\n=== apple\n=== Cherry\n");
        sort_records(&mut records);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["2 Apple", "apple", "banana", "Cherry"]);
    }
}
