//! Line classification and grouping.
//!
//! Raw page text is split into lines, table-like noise is dropped by
//! [`is_table_line`], and the surviving lines are grouped under the most
//! recent heading or subheading by [`OutlineBuilder`].
//!
//! # Example
//!
//! ```
//! use pdfoutline::outline::extract_outline_from_lines;
//! use pdfoutline::model::RecordKind;
//!
//! let outline = extract_outline_from_lines([
//!     "page 1 of 12",
//!     "INTRODUCTION",
//!     "this report covers the annual results.",
//! ]);
//!
//! assert_eq!(outline.len(), 1);
//! assert_eq!(outline.records[0].kind, RecordKind::Heading);
//! assert_eq!(outline.records[0].body, vec!["this report covers the annual results."]);
//! ```

mod builder;
mod filter;
mod patterns;

pub use builder::{build_outline, OutlineBuilder};
pub use filter::{filter_lines, is_table_line, MIN_LINE_CHARS};
pub use patterns::{classify, is_heading, is_subheading};

use crate::model::Outline;

/// Filter noise lines, then build the outline from what remains.
pub fn extract_outline_from_lines<I, S>(lines: I) -> Outline
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = OutlineBuilder::new();
    for line in lines {
        let line = line.as_ref();
        if is_table_line(line) {
            builder.skip_noise();
        } else {
            builder.push_line(line);
        }
    }
    builder.finish()
}

/// Split each page's text on line breaks and run the full pipeline over the
/// concatenated lines, pages in the order given.
pub fn extract_outline_from_pages<I, S>(pages: I) -> Outline
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pages: Vec<S> = pages.into_iter().collect();
    extract_outline_from_lines(pages.iter().flat_map(|page| page.as_ref().split('\n')))
}
