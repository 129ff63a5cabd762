//! HTML export of rendered outline text.
//!
//! The exporter works from the *display text* rather than the outline
//! itself: each line is recognised by its prefix, trimmed, and written as a
//! styled paragraph. Blank lines and lines without a known prefix are
//! dropped, so text edited by hand after rendering still exports cleanly.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Outline;

use super::display::{to_display_text, BODY_INDENT, SUBHEADING_PREFIX};
use super::options::DEFAULT_TITLE;

/// Style block written into every exported document.
pub const STYLE_SHEET: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
.heading { color: blue; font-size: 18px; font-weight: bold; margin-top: 20px; }
.subheading { color: gold; font-size: 16px; font-weight: bold; margin-left: 20px; margin-top: 10px; }
.context { margin-left: 40px; margin-top: 5px; }
";

/// Presentational class of an exported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Heading,
    Subheading,
    Context,
}

impl LineClass {
    /// CSS class name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineClass::Heading => "heading",
            LineClass::Subheading => "subheading",
            LineClass::Context => "context",
        }
    }

    /// Recognise a rendered display line by its prefix.
    pub fn of_line(line: &str) -> Option<Self> {
        if line.starts_with("Heading:") {
            Some(LineClass::Heading)
        } else if line.starts_with(SUBHEADING_PREFIX.trim_end()) {
            Some(LineClass::Subheading)
        } else if line.starts_with(BODY_INDENT) {
            Some(LineClass::Context)
        } else {
            None
        }
    }
}

/// Convert rendered display text to an HTML document.
pub fn export_html(rendered: &str) -> String {
    export_html_with_title(rendered, DEFAULT_TITLE)
}

/// Convert rendered display text to an HTML document with a custom title.
pub fn export_html_with_title(rendered: &str, title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang='en'>\n");
    html.push_str("<head>\n");
    html.push_str("<meta charset='UTF-8'>\n");
    html.push_str("<meta name='viewport' content='width=device-width, initial-scale=1.0'>\n");
    html.push_str(&format!(
        "<title>{}</title>\n",
        html_escape::encode_text(title)
    ));
    html.push_str("<style>\n");
    html.push_str(STYLE_SHEET);
    html.push_str("</style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");

    for line in rendered.lines() {
        let content = line.trim();
        if content.is_empty() {
            continue;
        }
        match LineClass::of_line(line) {
            Some(class) => html.push_str(&format!(
                "<p class='{}'>{}</p>\n",
                class.as_str(),
                html_escape::encode_text(content)
            )),
            None => log::debug!("skipping unrecognised line in export: {:?}", content),
        }
    }

    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

/// Render an outline and export it in one step.
pub fn outline_to_html(outline: &Outline) -> String {
    export_html(&to_display_text(outline))
}

/// Export rendered display text to an HTML file.
pub fn save_html<P: AsRef<Path>>(rendered: &str, path: P) -> Result<()> {
    save_html_with_title(rendered, path, DEFAULT_TITLE)
}

/// Export rendered display text to an HTML file with a custom title.
pub fn save_html_with_title<P: AsRef<Path>>(rendered: &str, path: P, title: &str) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(Error::Export(format!("{} is a directory", path.display())));
    }
    fs::write(path, export_html_with_title(rendered, title))?;
    log::debug!("wrote HTML outline to {}", path.display());
    Ok(())
}
