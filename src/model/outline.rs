//! The outline produced by one classification pass.

use super::{Metadata, OutlineRecord, RecordKind};
use serde::{Deserialize, Serialize};

/// Ordered sequence of outline records in document reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Metadata of the source document, when it came from a PDF
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Records in document order
    pub records: Vec<OutlineRecord>,

    /// Counters collected while building
    #[serde(default)]
    pub stats: BuildStats,
}

impl Outline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an outline from already-built records.
    pub fn from_records(records: Vec<OutlineRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Attach source metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, OutlineRecord> {
        self.records.iter()
    }

    /// Records classified as headings.
    pub fn headings(&self) -> impl Iterator<Item = &OutlineRecord> {
        self.records.iter().filter(|r| r.kind == RecordKind::Heading)
    }

    /// Records classified as subheadings.
    pub fn subheadings(&self) -> impl Iterator<Item = &OutlineRecord> {
        self.records
            .iter()
            .filter(|r| r.kind == RecordKind::Subheading)
    }

    /// Total body lines across all records.
    pub fn body_line_count(&self) -> usize {
        self.records.iter().map(|r| r.body.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineRecord;
    type IntoIter = std::slice::Iter<'a, OutlineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Outline {
    type Item = OutlineRecord;
    type IntoIter = std::vec::IntoIter<OutlineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Line counters gathered during one build.
///
/// `lines_read` counts every line handed to the pipeline;
/// `lines_read == noise_dropped + orphans_discarded + headings + subheadings + body_lines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Lines handed to the pipeline (before filtering)
    pub lines_read: usize,

    /// Lines dropped by the table-noise filter
    pub noise_dropped: usize,

    /// Non-classifying lines seen before any record was open
    pub orphans_discarded: usize,

    /// Heading records opened
    pub headings: usize,

    /// Subheading records opened
    pub subheadings: usize,

    /// Lines appended to a record body
    pub body_lines: usize,
}

impl BuildStats {
    /// Lines that reached the classifier.
    pub fn lines_classified(&self) -> usize {
        self.lines_read - self.noise_dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Outline {
        Outline::from_records(vec![
            OutlineRecord::heading("Chapter").with_body(["intro body line"]),
            OutlineRecord::subheading("Background Notes")
                .with_body(["more detail here", "and more still"]),
            OutlineRecord::heading("Section"),
        ])
    }

    #[test]
    fn test_outline_counts() {
        let outline = sample();
        assert_eq!(outline.len(), 3);
        assert!(!outline.is_empty());
        assert_eq!(outline.headings().count(), 2);
        assert_eq!(outline.subheadings().count(), 1);
        assert_eq!(outline.body_line_count(), 3);
    }

    #[test]
    fn test_outline_iteration_order() {
        let outline = sample();
        let texts: Vec<&str> = outline.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Chapter", "Background Notes", "Section"]);

        let owned: Vec<OutlineRecord> = outline.into_iter().collect();
        assert_eq!(owned.len(), 3);
    }

    #[test]
    fn test_metadata_skipped_when_absent() {
        let json = serde_json::to_string(&Outline::new()).unwrap();
        assert!(!json.contains("metadata"));
        assert!(json.contains("\"records\":[]"));
    }

    #[test]
    fn test_lines_classified() {
        let stats = BuildStats {
            lines_read: 10,
            noise_dropped: 4,
            ..Default::default()
        };
        assert_eq!(stats.lines_classified(), 6);
    }
}
