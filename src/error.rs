//! Error types for docxhtml library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docxhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The data is not a ZIP-based DOCX package.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// Error reading the ZIP container.
    #[error("ZIP container error: {0}")]
    Zip(String),

    /// Error parsing an XML part.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// A required package part is missing.
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// The caller supplied unusable arguments (wrong count or extension).
    #[error("{0}")]
    Usage(String),

    /// The source document could not be opened or parsed.
    #[error("Failed to open {}: {message}", path.display())]
    SourceOpen {
        /// Path of the source document
        path: PathBuf,
        /// Underlying failure
        message: String,
    },

    /// The HTML output could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::InvalidArchive(_) => Error::UnknownFormat,
            _ => Error::Zip(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingPart("word/document.xml".to_string());
        assert_eq!(err.to_string(), "Missing required part: word/document.xml");

        let err = Error::SourceOpen {
            path: PathBuf::from("report.docx"),
            message: "not a zip".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to open report.docx: not a zip");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_output_write_source() {
        use std::error::Error as _;

        let err = Error::OutputWrite {
            path: PathBuf::from("out.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to write out.html"));
    }
}
