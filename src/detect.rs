//! DOCX format detection and path handling.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Extension accepted as a source document.
pub const DOCX_EXTENSION: &str = "docx";

/// Extension of the rendered output.
pub const HTML_EXTENSION: &str = "html";

/// Verify that a file starts with the ZIP container magic.
///
/// # Example
/// ```no_run
/// use docxhtml::detect::detect_format_from_path;
///
/// detect_format_from_path("schedule.docx").unwrap();
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader
        .read_exact(&mut header)
        .map_err(|_| Error::UnknownFormat)?;
    detect_format_from_bytes(&header)
}

/// Verify that bytes start with the ZIP container magic.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<()> {
    if data.starts_with(ZIP_MAGIC) {
        Ok(())
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if bytes look like a DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

/// Check if a path ends in `.docx` (case-insensitive).
pub fn has_docx_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCX_EXTENSION))
}

/// Output path for a source document: same location, `.html` extension.
pub fn html_output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref().with_extension(HTML_EXTENSION)
}
