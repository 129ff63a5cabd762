//! PDF text source backed by lopdf.

use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;
use unicode_normalization::UnicodeNormalization;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::Metadata;

use super::options::{ErrorMode, SourceOptions};
use super::{PageText, TextSource};

/// Page text reader for PDF documents.
pub struct PdfSource {
    doc: LopdfDocument,
    options: SourceOptions,
}

impl PdfSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, SourceOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: SourceOptions) -> Result<Self> {
        let path = path.as_ref();

        detect_format_from_path(path).map_err(|e| match e {
            Error::Io(io) => Error::SourceUnavailable(format!("{}: {}", path.display(), io)),
            other => other,
        })?;

        let doc = LopdfDocument::load(path)?;
        log::debug!(
            "opened {} (PDF {}, {} pages)",
            path.display(),
            doc.version,
            doc.get_pages().len()
        );

        Ok(Self { doc, options })
    }

    /// Read a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, SourceOptions::default())
    }

    /// Read a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: SourceOptions) -> Result<Self> {
        detect_format_from_bytes(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self { doc, options })
    }

    /// Read a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Options this source was opened with.
    pub fn options(&self) -> &SourceOptions {
        &self.options
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Read the document info dictionary.
    pub fn read_metadata(&self) -> Metadata {
        let mut metadata = Metadata::with_version(self.doc.version.to_string());
        metadata.page_count = self.page_count();
        metadata.encrypted = self.doc.is_encrypted();

        let info = self
            .doc
            .trailer
            .get(b"Info")
            .and_then(|info| info.as_reference())
            .and_then(|info_ref| self.doc.get_dictionary(info_ref));

        if let Ok(info) = info {
            metadata.title = get_string_from_dict(info, b"Title");
            metadata.author = get_string_from_dict(info, b"Author");
            metadata.subject = get_string_from_dict(info, b"Subject");
            metadata.creator = get_string_from_dict(info, b"Creator");
            metadata.producer = get_string_from_dict(info, b"Producer");
            metadata.created =
                get_string_from_dict(info, b"CreationDate").and_then(|d| parse_pdf_date(&d));
            metadata.modified =
                get_string_from_dict(info, b"ModDate").and_then(|d| parse_pdf_date(&d));
        }

        metadata
    }

    fn extract_page_text(&self, page_num: u32) -> Result<String> {
        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_num, e)))
    }

    fn normalize(&self, text: String) -> String {
        if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text
        }
    }
}

impl TextSource for PdfSource {
    fn page_texts(&self) -> Result<Vec<PageText>> {
        let total = self.page_count();
        if let Some(last) = self.options.pages.last_page() {
            if last > total {
                match self.options.error_mode {
                    ErrorMode::Strict => return Err(Error::PageOutOfRange(last, total)),
                    ErrorMode::Lenient => log::warn!(
                        "page {} requested but document has {} pages",
                        last,
                        total
                    ),
                }
            }
        }

        let mut pages = Vec::new();
        for page_num in self.doc.get_pages().into_keys() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            let text = match self.extract_page_text(page_num) {
                Ok(text) => self.normalize(text),
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    String::new()
                }
                Err(e) => return Err(e),
            };

            log::debug!("page {}: {} bytes of text", page_num, text.len());
            pages.push(PageText::new(page_num, text));
        }

        Ok(pages)
    }

    fn metadata(&self) -> Option<Metadata> {
        Some(self.read_metadata())
    }
}

/// Helper to get a string from a PDF dictionary.
fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        lopdf::Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        lopdf::Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
///
/// The timezone suffix is ignored and the time is taken as UTC.
fn parse_pdf_date(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);

    let field = |range: std::ops::Range<usize>, default: u32| -> u32 {
        s.get(range).and_then(|v| v.parse().ok()).unwrap_or(default)
    };

    let year: i32 = s.get(0..4)?.parse().ok()?;
    chrono::NaiveDate::from_ymd_opt(year, field(4..6, 1), field(6..8, 1))
        .and_then(|date| date.and_hms_opt(field(8..10, 0), field(10..12, 0), field(12..14, 0)))
        .map(|dt| chrono::DateTime::from_naive_utc_and_offset(dt, chrono::Utc))
}
