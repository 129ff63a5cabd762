//! Rendering module for presenting an outline.
//!
//! Display text is the primary output; the HTML exporter consumes display
//! text, while JSON and Markdown are produced straight from the outline.

mod display;
mod html;
mod json;
mod markdown;
mod options;
pub mod visitor;

pub use display::{
    to_display_lines, to_display_text, DisplayRenderer, BODY_INDENT, HEADING_PREFIX,
    SUBHEADING_PREFIX,
};
pub use html::{
    export_html, export_html_with_title, outline_to_html, save_html, save_html_with_title,
    LineClass, STYLE_SHEET,
};
pub use json::{from_json, to_json, JsonFormat};
pub use markdown::to_markdown;
pub use options::{RenderOptions, DEFAULT_TITLE};
pub use visitor::{
    CompositeVisitor, DefaultVisitor, OutlineVisitor, SkipBodyVisitor, VisitorAction,
};
