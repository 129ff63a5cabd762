//! Observer hooks for customizing outline rendering.
//!
//! A visitor is consulted for every heading, subheading, and body line
//! before it is rendered, and may keep it, replace it, or drop it. Visitors
//! never feed anything back into the classifier.
//!
//! # Example
//!
//! ```
//! use pdfoutline::render::visitor::{OutlineVisitor, VisitorAction};
//!
//! struct ShoutingHeadings;
//!
//! impl OutlineVisitor for ShoutingHeadings {
//!     fn visit_heading(&mut self, text: &str) -> VisitorAction {
//!         VisitorAction::Replace(format!("== {} ==", text.to_uppercase()))
//!     }
//! }
//! ```

use crate::model::OutlineRecord;

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the display line with custom output (may span several lines).
    Replace(String),

    /// Skip this line entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the element should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for observing outline elements during rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait OutlineVisitor: Send + Sync {
    /// Called before rendering a heading line.
    fn visit_heading(&mut self, text: &str) -> VisitorAction {
        let _ = text;
        VisitorAction::Continue
    }

    /// Called before rendering a subheading line.
    fn visit_subheading(&mut self, text: &str) -> VisitorAction {
        let _ = text;
        VisitorAction::Continue
    }

    /// Called before rendering each body line of a record.
    ///
    /// # Arguments
    /// * `line` - The body line
    /// * `record` - The record that owns it
    fn visit_body_line(&mut self, line: &str, record: &OutlineRecord) -> VisitorAction {
        let _ = (line, record);
        VisitorAction::Continue
    }

    /// Called when rendering of a record begins.
    fn on_record_start(&mut self, index: usize, record: &OutlineRecord) {
        let _ = (index, record);
    }

    /// Called after the last body line of a record.
    fn on_record_end(&mut self, index: usize) {
        let _ = index;
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl OutlineVisitor for DefaultVisitor {}

/// Visitor that drops every body line, leaving only the heading skeleton.
#[derive(Debug, Clone, Default)]
pub struct SkipBodyVisitor;

impl OutlineVisitor for SkipBodyVisitor {
    fn visit_body_line(&mut self, _line: &str, _record: &OutlineRecord) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn OutlineVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: OutlineVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn first_action(
        &mut self,
        mut visit: impl FnMut(&mut dyn OutlineVisitor) -> VisitorAction,
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visit(visitor.as_mut());
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineVisitor for CompositeVisitor {
    fn visit_heading(&mut self, text: &str) -> VisitorAction {
        self.first_action(|v| v.visit_heading(text))
    }

    fn visit_subheading(&mut self, text: &str) -> VisitorAction {
        self.first_action(|v| v.visit_subheading(text))
    }

    fn visit_body_line(&mut self, line: &str, record: &OutlineRecord) -> VisitorAction {
        self.first_action(|v| v.visit_body_line(line, record))
    }

    fn on_record_start(&mut self, index: usize, record: &OutlineRecord) {
        for visitor in &mut self.visitors {
            visitor.on_record_start(index, record);
        }
    }

    fn on_record_end(&mut self, index: usize) {
        for visitor in &mut self.visitors {
            visitor.on_record_end(index);
        }
    }
}
