//! Table-noise line filter.
//!
//! A line is treated as table debris when it is short or carries any digit.
//! The rule is deliberately coarse: it also drops short headings and any
//! heading with a numeral in it, and the classification patterns are tuned
//! around exactly this behaviour.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines whose trimmed length is below this many characters are noise.
pub const MIN_LINE_CHARS: usize = 10;

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit regex"));

/// Returns `true` if the line should be dropped before classification.
///
/// Length is counted in characters after trimming surrounding whitespace.
/// Any Unicode decimal digit anywhere in the line also marks it as noise.
pub fn is_table_line(line: &str) -> bool {
    line.trim().chars().count() < MIN_LINE_CHARS || DIGIT.is_match(line)
}

/// Keep only the lines that survive [`is_table_line`], in order.
pub fn filter_lines<I, S>(lines: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| !is_table_line(line.as_ref()))
        .collect()
}
