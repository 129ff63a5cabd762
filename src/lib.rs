//! # pdfoutline
//!
//! Heuristic heading/subheading outline extraction from PDF text.
//!
//! The text of every page is split into lines, table-like noise is
//! dropped, and each remaining line is classified as a heading, a
//! subheading, or body text belonging to the most recent heading. The
//! resulting [`Outline`] can be rendered as indented text, exported to
//! styled HTML, or serialized to JSON and Markdown.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{extract_outline, render};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     let outline = extract_outline("document.pdf")?;
//!
//!     let text = render::to_display_text(&outline);
//!     print!("{}", text);
//!
//!     render::save_html(&text, "document.html")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Classification
//!
//! - A line is noise if it is shorter than ten characters after trimming or
//!   contains any digit.
//! - A heading is `Chapter`, `Section`, or a line starting with an uppercase
//!   letter followed by an uppercase letter or digit.
//! - A subheading is a `N.N` prefixed line, or a capital letter followed by
//!   at least three letters or spaces and nothing else.
//! - Heading wins when both match. Body lines seen before the first heading
//!   are discarded.

pub mod detect;
pub mod error;
pub mod model;
pub mod outline;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use model::{BuildStats, Metadata, Outline, OutlineRecord, RecordKind};
pub use outline::{
    build_outline, extract_outline_from_lines, extract_outline_from_pages, OutlineBuilder,
};
pub use render::{JsonFormat, RenderOptions};
pub use source::{ErrorMode, MemorySource, PageSelection, PdfSource, SourceOptions, TextSource};

use std::io::Read;
use std::path::Path;

/// Extract the outline of a PDF file.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::extract_outline;
///
/// let outline = extract_outline("document.pdf").unwrap();
/// for record in &outline {
///     println!("{}: {}", record.kind, record.text);
/// }
/// ```
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Result<Outline> {
    let source = PdfSource::open(path)?;
    outline_from_source(&source)
}

/// Extract the outline of a PDF file with custom source options.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{extract_outline_with_options, PageSelection, SourceOptions};
///
/// let options = SourceOptions::new()
///     .lenient()
///     .with_pages(PageSelection::Range(1..=10));
/// let outline = extract_outline_with_options("document.pdf", options).unwrap();
/// ```
pub fn extract_outline_with_options<P: AsRef<Path>>(
    path: P,
    options: SourceOptions,
) -> Result<Outline> {
    let source = PdfSource::open_with_options(path, options)?;
    outline_from_source(&source)
}

/// Extract the outline of a PDF held in memory.
pub fn extract_outline_from_bytes(data: &[u8]) -> Result<Outline> {
    let source = PdfSource::from_bytes(data)?;
    outline_from_source(&source)
}

/// Extract the outline of a PDF read from a reader.
pub fn extract_outline_from_reader<R: Read>(reader: R) -> Result<Outline> {
    let source = PdfSource::from_reader(reader)?;
    outline_from_source(&source)
}

/// Run the full pipeline over any text source.
///
/// Fails without a partial outline if the source cannot produce its pages.
pub fn outline_from_source<S: TextSource + ?Sized>(source: &S) -> Result<Outline> {
    let pages = source.page_texts()?;
    log::debug!("classifying {} pages", pages.len());

    let mut outline = extract_outline_from_pages(pages.iter().map(|page| page.text.as_str()));
    outline.metadata = source.metadata();
    Ok(outline)
}

/// Run the full pipeline over plain text; form feeds separate pages.
///
/// # Example
///
/// ```
/// use pdfoutline::{outline_from_text, RecordKind};
///
/// let outline = outline_from_text("ABSTRACT AND SCOPE\nwe study outlines in detail.\n");
/// assert_eq!(outline.records[0].kind, RecordKind::Heading);
/// ```
pub fn outline_from_text(text: &str) -> Outline {
    extract_outline_from_pages(text.split('\x0c'))
}

/// Extract a PDF outline and render it as indented display text.
pub fn to_display_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let outline = extract_outline(path)?;
    Ok(render::to_display_text(&outline))
}

/// Extract a PDF outline and export it as an HTML document.
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let outline = extract_outline(path)?;
    Ok(render::outline_to_html(&outline))
}

/// Extract a PDF outline and serialize it to JSON.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{to_json, JsonFormat};
///
/// let json = to_json("document.pdf", JsonFormat::Pretty).unwrap();
/// std::fs::write("outline.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let outline = extract_outline(path)?;
    render::to_json(&outline, format)
}

/// Extract a PDF outline and render it as Markdown.
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let outline = extract_outline(path)?;
    Ok(render::to_markdown(&outline, &RenderOptions::default()))
}

/// Builder for extracting and rendering outlines.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{PageSelection, PdfOutline};
///
/// let html = PdfOutline::new()
///     .lenient()
///     .with_pages(PageSelection::Range(1..=20))
///     .with_title("Quarterly Report")
///     .extract("report.pdf")?
///     .to_html();
/// # Ok::<(), pdfoutline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfOutline {
    source_options: SourceOptions,
    render_options: RenderOptions,
}

impl PdfOutline {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat pages that fail text extraction as empty instead of failing.
    pub fn lenient(mut self) -> Self {
        self.source_options = self.source_options.lenient();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.source_options = self.source_options.with_pages(pages);
        self
    }

    /// NFC-normalize page text before classification.
    pub fn normalize_unicode(mut self) -> Self {
        self.source_options = self.source_options.with_unicode_normalization(true);
        self
    }

    /// Render headings and subheadings only.
    pub fn headings_only(mut self) -> Self {
        self.render_options = self.render_options.headings_only();
        self
    }

    /// Set the exported HTML title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Extract the outline of a PDF file.
    pub fn extract<P: AsRef<Path>>(self, path: P) -> Result<OutlineResult> {
        let source = PdfSource::open_with_options(path, self.source_options.clone())?;
        self.finish(&source)
    }

    /// Extract the outline of a PDF held in memory.
    pub fn extract_bytes(self, data: &[u8]) -> Result<OutlineResult> {
        let source = PdfSource::from_bytes_with_options(data, self.source_options.clone())?;
        self.finish(&source)
    }

    /// Extract the outline from any text source.
    pub fn extract_source<S: TextSource + ?Sized>(self, source: &S) -> Result<OutlineResult> {
        self.finish(source)
    }

    fn finish<S: TextSource + ?Sized>(self, source: &S) -> Result<OutlineResult> {
        Ok(OutlineResult {
            outline: outline_from_source(source)?,
            render_options: self.render_options,
        })
    }
}

/// An extracted outline together with the options to render it with.
pub struct OutlineResult {
    /// The extracted outline
    pub outline: Outline,
    render_options: RenderOptions,
}

impl OutlineResult {
    /// Render as indented display text.
    pub fn to_display_text(&self) -> String {
        render::DisplayRenderer::new(self.render_options.clone()).render_text(&self.outline)
    }

    /// Export as HTML.
    pub fn to_html(&self) -> String {
        render::export_html_with_title(&self.to_display_text(), &self.render_options.title)
    }

    /// Export as HTML to a file.
    pub fn save_html<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::save_html_with_title(&self.to_display_text(), path, &self.render_options.title)
    }

    /// Serialize to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.outline, format)
    }

    /// Render as Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.outline, &self.render_options)
    }

    /// Get the outline.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }
}
