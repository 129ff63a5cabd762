//! Indented text rendering of an outline.
//!
//! Each record becomes one display line followed by its body lines:
//!
//! ```text
//! Heading: <text>
//!   Subheading: <text>
//!     <body line>
//! ```

use crate::model::{Outline, OutlineRecord, RecordKind};

use super::visitor::{DefaultVisitor, OutlineVisitor, VisitorAction};
use super::RenderOptions;

/// Prefix of a heading display line.
pub const HEADING_PREFIX: &str = "Heading: ";

/// Prefix of a subheading display line.
pub const SUBHEADING_PREFIX: &str = "  Subheading: ";

/// Indentation of a body display line.
pub const BODY_INDENT: &str = "    ";

/// Render an outline to display lines with default options.
pub fn to_display_lines(outline: &Outline) -> Vec<String> {
    DisplayRenderer::new(RenderOptions::default()).render(outline)
}

/// Render an outline to newline-terminated display text.
pub fn to_display_text(outline: &Outline) -> String {
    DisplayRenderer::new(RenderOptions::default()).render_text(outline)
}

/// Display renderer.
pub struct DisplayRenderer {
    options: RenderOptions,
    visitor: Box<dyn OutlineVisitor>,
}

impl DisplayRenderer {
    /// Create a new display renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            visitor: Box::new(DefaultVisitor),
        }
    }

    /// Route every rendered element through a visitor.
    pub fn with_visitor<V: OutlineVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Box::new(visitor);
        self
    }

    /// Render to display lines.
    pub fn render(mut self, outline: &Outline) -> Vec<String> {
        let mut lines = Vec::with_capacity(outline.len() + outline.body_line_count());
        for (index, record) in outline.iter().enumerate() {
            self.render_record(&mut lines, index, record);
        }
        lines
    }

    /// Render to a single string, one display line per text line.
    pub fn render_text(self, outline: &Outline) -> String {
        let mut output = String::new();
        for line in self.render(outline) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    fn render_record(&mut self, lines: &mut Vec<String>, index: usize, record: &OutlineRecord) {
        self.visitor.on_record_start(index, record);

        let (action, prefix) = match record.kind {
            RecordKind::Heading => (self.visitor.visit_heading(&record.text), HEADING_PREFIX),
            RecordKind::Subheading => (
                self.visitor.visit_subheading(&record.text),
                SUBHEADING_PREFIX,
            ),
        };
        emit(lines, action, || format!("{}{}", prefix, record.text));

        if self.options.include_body {
            for line in &record.body {
                let action = self.visitor.visit_body_line(line, record);
                emit(lines, action, || format!("{}{}", BODY_INDENT, line));
            }
        }

        self.visitor.on_record_end(index);
    }
}

fn emit(lines: &mut Vec<String>, action: VisitorAction, default: impl FnOnce() -> String) {
    match action {
        VisitorAction::Continue => lines.push(default()),
        VisitorAction::Replace(content) => lines.extend(content.lines().map(str::to_string)),
        VisitorAction::Skip => {}
    }
}
