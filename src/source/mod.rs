//! Document text sources.
//!
//! A [`TextSource`] supplies the ordered per-page text of a document. The
//! classifier only ever sees the lines obtained by splitting that text on
//! line breaks, page after page.

mod memory;
mod options;
mod pdf;

pub use memory::MemorySource;
pub use options::{ErrorMode, PageSelection, SourceOptions};
pub use pdf::PdfSource;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Metadata;

/// Raw text of a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// 1-indexed page number
    pub number: u32,

    /// Text as extracted, line breaks included
    pub text: String,
}

impl PageText {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Lines of this page, split on `'\n'`.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// Something that can produce the ordered page texts of a document.
pub trait TextSource {
    /// Page texts in document order.
    fn page_texts(&self) -> Result<Vec<PageText>>;

    /// Document metadata, when the source has any.
    fn metadata(&self) -> Option<Metadata> {
        None
    }

    /// All lines of the document, page order then line order.
    fn lines(&self) -> Result<Vec<String>> {
        Ok(self
            .page_texts()?
            .iter()
            .flat_map(|page| page.lines().map(str::to_string))
            .collect())
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn page_texts(&self) -> Result<Vec<PageText>> {
        (**self).page_texts()
    }

    fn metadata(&self) -> Option<Metadata> {
        (**self).metadata()
    }
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn page_texts(&self) -> Result<Vec<PageText>> {
        (**self).page_texts()
    }

    fn metadata(&self) -> Option<Metadata> {
        (**self).metadata()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text_lines() {
        let page = PageText::new(1, "first\nsecond\n");
        let lines: Vec<&str> = page.lines().collect();
        assert_eq!(lines, vec!["first", "second", ""]);
    }

    #[test]
    fn test_default_lines_flatten_pages() {
        let source = MemorySource::from_pages(["a\nb", "c"]);
        assert_eq!(source.lines().unwrap(), vec!["a", "b", "c"]);
        assert!(source.metadata().is_none());
    }

    #[test]
    fn test_boxed_source() {
        let source: Box<dyn TextSource> = Box::new(MemorySource::from_text("only page"));
        assert_eq!(source.page_texts().unwrap().len(), 1);
    }
}
