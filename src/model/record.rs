//! Outline records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The tier a classifying line was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Top tier ("Chapter", "Section", or an all-caps style line).
    Heading,
    /// Second tier (dotted number prefix or a capitalised phrase).
    Subheading,
}

impl RecordKind {
    /// Label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Heading => "Heading",
            RecordKind::Subheading => "Subheading",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A heading or subheading together with the body lines that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRecord {
    /// Classification of the line that opened this record
    pub kind: RecordKind,

    /// Trimmed text of the classifying line
    pub text: String,

    /// Body lines in reading order
    pub body: Vec<String>,
}

impl OutlineRecord {
    /// Create a record with no body lines.
    pub fn new(kind: RecordKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            body: Vec::new(),
        }
    }

    /// Create a heading record.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(RecordKind::Heading, text)
    }

    /// Create a subheading record.
    pub fn subheading(text: impl Into<String>) -> Self {
        Self::new(RecordKind::Subheading, text)
    }

    /// Builder-style body assignment, mostly useful in tests.
    pub fn with_body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Append a body line.
    pub fn push_body(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }

    pub fn is_heading(&self) -> bool {
        self.kind == RecordKind::Heading
    }

    pub fn is_subheading(&self) -> bool {
        self.kind == RecordKind::Subheading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_kind_labels() {
        assert_eq!(RecordKind::Heading.to_string(), "Heading");
        assert_eq!(RecordKind::Subheading.to_string(), "Subheading");
        assert_eq!(RecordKind::Heading.label(), "Heading");
    }

    #[test]
    fn test_record_body() {
        let mut record = OutlineRecord::heading("Chapter");
        assert!(record.is_heading());
        assert!(record.body.is_empty());

        record.push_body("first line of body");
        record.push_body("second line of body");
        assert_eq!(record.body, vec!["first line of body", "second line of body"]);
    }

    #[test]
    fn test_record_serde_shape() {
        let record = OutlineRecord::subheading("Background Notes").with_body(["detail text"]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"Subheading","text":"Background Notes","body":["detail text"]}"#
        );
    }
}
