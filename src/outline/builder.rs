//! Single-pass outline builder.
//!
//! The builder holds at most one open record. A classifying line seals the
//! open record (if any) and opens a new one; any other line is appended to
//! the open record's body, or discarded when nothing is open yet. Records
//! are never reopened once sealed.

use crate::model::{BuildStats, Outline, OutlineRecord, RecordKind};

use super::patterns::classify;

/// Accumulator threaded through one scan over the lines of a document.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    current: Option<OutlineRecord>,
    records: Vec<OutlineRecord>,
    stats: BuildStats,
}

impl OutlineBuilder {
    /// Create a builder with no open record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line. Surrounding whitespace is trimmed before classification.
    pub fn push_line(&mut self, line: &str) {
        self.stats.lines_read += 1;
        let line = line.trim();

        match classify(line) {
            Some(kind) => {
                self.seal();
                match kind {
                    RecordKind::Heading => self.stats.headings += 1,
                    RecordKind::Subheading => self.stats.subheadings += 1,
                }
                self.current = Some(OutlineRecord::new(kind, line));
            }
            None => match self.current.as_mut() {
                Some(record) => {
                    record.push_body(line);
                    self.stats.body_lines += 1;
                }
                None => self.stats.orphans_discarded += 1,
            },
        }
    }

    /// Count a line that the noise filter removed before it reached the builder.
    pub fn skip_noise(&mut self) {
        self.stats.lines_read += 1;
        self.stats.noise_dropped += 1;
    }

    /// Whether a record is currently open.
    pub fn has_open_record(&self) -> bool {
        self.current.is_some()
    }

    /// Records sealed so far (the open record is not included).
    pub fn sealed(&self) -> &[OutlineRecord] {
        &self.records
    }

    /// Counters so far.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Seal the open record, if any, and return the finished outline.
    pub fn finish(mut self) -> Outline {
        self.seal();
        log::debug!(
            "outline built: {} records ({} headings, {} subheadings, {} body lines, {} orphans, {} noise)",
            self.records.len(),
            self.stats.headings,
            self.stats.subheadings,
            self.stats.body_lines,
            self.stats.orphans_discarded,
            self.stats.noise_dropped,
        );
        Outline {
            metadata: None,
            records: self.records,
            stats: self.stats,
        }
    }

    fn seal(&mut self) {
        if let Some(record) = self.current.take() {
            self.records.push(record);
        }
    }
}

/// Build an outline from lines that have already been filtered.
pub fn build_outline<I, S>(lines: I) -> Outline
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .fold(OutlineBuilder::new(), |mut builder, line| {
            builder.push_line(line.as_ref());
            builder
        })
        .finish()
}
