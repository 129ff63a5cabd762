//! PDF header sniffing.
//!
//! Only the `%PDF-X.Y` header is inspected; nothing else about the file is
//! validated here. Readers tolerate a little garbage before the header, so
//! the magic is searched for within the first [`HEADER_WINDOW`] bytes.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header information found at the start of a PDF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// Version string as written in the header (e.g. "1.7").
    pub version: String,
    /// Byte offset of the `%PDF-` marker.
    pub header_offset: usize,
}

impl PdfFormat {
    /// Major version number, if the version string is well formed.
    pub fn major(&self) -> Option<u8> {
        self.version_digit(0)
    }

    /// Minor version number, if the version string is well formed.
    pub fn minor(&self) -> Option<u8> {
        self.version_digit(2)
    }

    fn version_digit(&self, index: usize) -> Option<u8> {
        let digit = self.version.chars().nth(index)?.to_digit(10)?;
        Some(digit as u8)
    }
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3;

/// How far into the file the header may appear.
pub const HEADER_WINDOW: usize = 1024;

/// Detect the PDF header of a file on disk.
///
/// # Example
/// ```no_run
/// use pdfoutline::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.pdf").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_WINDOW);
    file.take(HEADER_WINDOW as u64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the PDF header in a byte slice.
///
/// Returns `Error::UnknownFormat` when no `%PDF-` marker followed by a
/// version is found, and `Error::UnsupportedVersion` when the version is
/// outside 1.0 through 2.0.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    let window = &data[..data.len().min(HEADER_WINDOW)];
    let header_offset = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;

    let start = header_offset + PDF_MAGIC.len();
    let version_bytes = data
        .get(start..start + VERSION_LEN)
        .ok_or(Error::UnknownFormat)?;
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_supported_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfFormat {
        version,
        header_offset,
    })
}

fn is_supported_version(version: &str) -> bool {
    match version.as_bytes() {
        [b'1', b'.', minor] => minor.is_ascii_digit(),
        [b'2', b'.', b'0'] => true,
        _ => false,
    }
}

/// Check if a file starts with a PDF header.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes start with a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
