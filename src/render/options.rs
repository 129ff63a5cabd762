//! Rendering options.

/// Title used by the HTML exporter when none is set.
pub const DEFAULT_TITLE: &str = "Extracted PDF Content";

/// Options for rendering an outline.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render body lines under each heading
    pub include_body: bool,

    /// Document title for HTML export
    pub title: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or omit body lines.
    pub fn with_body(mut self, include: bool) -> Self {
        self.include_body = include;
        self
    }

    /// Render headings and subheadings only.
    pub fn headings_only(self) -> Self {
        self.with_body(false)
    }

    /// Set the HTML document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_body: true,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
