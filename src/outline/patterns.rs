//! Whole-line heading and subheading patterns.
//!
//! Both patterns are anchored at both ends of the (already trimmed) line.
//! When a line matches both, it is a heading.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::RecordKind;

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:Chapter|Section|[A-Z][A-Z0-9].*)$").expect("valid heading regex")
});

static SUBHEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+\.\d+.*|[A-Z][A-Za-z\s]{3,})$").expect("valid subheading regex")
});

/// `Chapter`, `Section`, or an uppercase letter followed by an uppercase
/// letter or digit, then anything.
pub fn is_heading(line: &str) -> bool {
    HEADING.is_match(line)
}

/// A `N.N` prefix followed by anything, or an uppercase letter followed by at
/// least three ASCII letters or whitespace characters and nothing else.
pub fn is_subheading(line: &str) -> bool {
    SUBHEADING.is_match(line)
}

/// Classify a trimmed line. Heading takes precedence over subheading.
pub fn classify(line: &str) -> Option<RecordKind> {
    if is_heading(line) {
        Some(RecordKind::Heading)
    } else if is_subheading(line) {
        Some(RecordKind::Subheading)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_literals() {
        assert!(is_heading("Chapter"));
        assert!(is_heading("Section"));
        // literal alternatives are whole-line only
        assert!(!is_heading("Chapters"));
        assert!(!is_heading("chapter"));
    }

    #[test]
    fn test_heading_uppercase_prefix() {
        assert!(is_heading("INTRODUCTION"));
        assert!(is_heading("AB"));
        assert!(is_heading("A1 anything after this"));
        assert!(is_heading("NASA missions were reviewed"));
        assert!(!is_heading("A"));
        assert!(!is_heading("Ab"));
        assert!(!is_heading("aBC"));
        assert!(!is_heading(""));
    }

    #[test]
    fn test_heading_is_not_a_substring_search() {
        assert!(!is_heading("the INTRODUCTION"));
        assert!(!is_heading(" Chapter"));
    }

    #[test]
    fn test_subheading_dotted_prefix() {
        assert!(is_subheading("1.2 Background"));
        assert!(is_subheading("10.15"));
        assert!(is_subheading("3.4.5 Deeper numbering"));
        assert!(!is_subheading("1. Background"));
        assert!(!is_subheading(".2 Background"));
    }

    #[test]
    fn test_subheading_capitalised_phrase() {
        assert!(is_subheading("Background"));
        assert!(is_subheading("Intro"));
        assert!(is_subheading("Abcd"));
        assert!(is_subheading("Results and Discussion"));
        assert!(!is_subheading("Abc"));
        assert!(!is_subheading("background"));
        // punctuation breaks the whole-line match
        assert!(!is_subheading("Results, and more"));
        assert!(!is_subheading("Intro text here."));
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(classify("Chapter"), Some(RecordKind::Heading));
        assert_eq!(classify("1.2 Background"), Some(RecordKind::Subheading));
        assert_eq!(classify("Background Notes"), Some(RecordKind::Subheading));
        assert_eq!(classify("just some prose"), None);
    }

    #[test]
    fn test_lines_matching_both_are_headings() {
        for line in ["ABCD", "ABSTRACT", "OVERVIEW OF RESULTS", "Chapter", "Section"] {
            assert!(is_heading(line), "{line}");
            assert!(is_subheading(line), "{line}");
            assert_eq!(classify(line), Some(RecordKind::Heading), "{line}");
        }
    }
}
