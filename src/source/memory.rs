//! In-memory text source.

use crate::error::Result;
use crate::model::Metadata;

use super::{PageText, TextSource};

/// Form feed, the page separator written by most text dumpers.
const PAGE_BREAK: char = '\x0c';

/// Page texts held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Vec<PageText>,
    metadata: Option<Metadata>,
}

impl MemorySource {
    /// Create a source from page strings, numbered from 1.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageText::new(i as u32 + 1, text))
            .collect();
        Self {
            pages,
            metadata: None,
        }
    }

    /// Create a source from plain text, treating form feeds as page breaks.
    pub fn from_text(text: &str) -> Self {
        Self::from_pages(text.split(PAGE_BREAK))
    }

    /// Attach metadata to report alongside the pages.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl TextSource for MemorySource {
    fn page_texts(&self) -> Result<Vec<PageText>> {
        Ok(self.pages.clone())
    }

    fn metadata(&self) -> Option<Metadata> {
        self.metadata.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pages_numbering() {
        let source = MemorySource::from_pages(vec!["one".to_string(), "two".to_string()]);
        let pages = source.page_texts().unwrap();
        assert_eq!(pages[0], PageText::new(1, "one"));
        assert_eq!(pages[1], PageText::new(2, "two"));
    }

    #[test]
    fn test_from_text_splits_form_feeds() {
        let source = MemorySource::from_text("page one\x0cpage two\x0cpage three");
        assert_eq!(source.page_count(), 3);
        assert_eq!(source.page_texts().unwrap()[2].text, "page three");
    }

    #[test]
    fn test_metadata_passthrough() {
        let mut meta = Metadata::default();
        meta.title = Some("Notes".to_string());
        let source = MemorySource::from_text("x").with_metadata(meta.clone());
        assert_eq!(source.metadata(), Some(meta));
    }
}
