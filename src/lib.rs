//! # docxhtml
//!
//! DOCX to standalone HTML conversion library for Rust.
//!
//! This library reads word-processing documents and renders them as a single
//! responsive HTML page. Tables keep their merged cells: horizontal and
//! vertical merges are resolved into a logical grid and emitted with
//! `colspan` / `rowspan`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docxhtml::{parse_file, render};
//!
//! fn main() -> docxhtml::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("schedule.docx")?;
//!
//!     // Convert to HTML
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Merge-aware tables**: row and column spans reconstructed from raw cells
//! - **Run formatting**: bold, italic, underline, scaled font sizes, colours
//! - **Headings**: outline levels and `Heading N` styles mapped to `<h1>`..`<h6>`
//! - **Responsive output**: embedded stylesheet with narrow-screen breakpoints

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{convert_file, ConvertOptions, ConvertOutcome};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx_bytes};
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, Document, Metadata, Paragraph, ParagraphStyle, Rgb, Table, TableCell,
    TableRow, TextRun, TextStyle, VerticalMerge,
};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use render::{JsonFormat, RenderOptions, RenderResult, RenderStats};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use docxhtml::parse_file;
///
/// let doc = parse_file("schedule.docx").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let mut parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use docxhtml::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new()
///     .strict()
///     .with_inline_section_breaks(false);
/// let doc = parse_file_with_options("schedule.docx", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let mut parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let mut parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let mut parser = DocxParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a DOCX from a reader.
///
/// # Example
///
/// ```no_run
/// use docxhtml::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("schedule.docx").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let mut parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Convert a DOCX file to an HTML page.
///
/// # Example
///
/// ```no_run
/// use docxhtml::to_html;
///
/// let html = to_html("schedule.docx").unwrap();
/// std::fs::write("schedule.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Convert a DOCX file to an HTML page with custom options.
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, options)
}

/// Convert a DOCX file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and converting DOCX documents.
///
/// # Example
///
/// ```no_run
/// use docxhtml::DocxHtml;
///
/// let html = DocxHtml::new()
///     .strict()
///     .with_title("Timetable")
///     .parse("schedule.docx")?
///     .to_html()?;
/// # Ok::<(), docxhtml::Error>(())
/// ```
pub struct DocxHtml {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl DocxHtml {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Enable strict parsing mode.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Ignore section breaks carried by paragraphs.
    pub fn without_inline_section_breaks(mut self) -> Self {
        self.parse_options = self.parse_options.with_inline_section_breaks(false);
        self
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Set the font scale factor.
    pub fn with_font_scale(mut self, scale: f32) -> Self {
        self.render_options = self.render_options.with_font_scale(scale);
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DocxHtmlResult> {
        let mut parser = DocxParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(DocxHtmlResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a DOCX from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<DocxHtmlResult> {
        let mut parser = DocxParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(DocxHtmlResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for DocxHtml {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a DOCX document.
pub struct DocxHtmlResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl DocxHtmlResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to HTML with rendering statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let builder = DocxHtml::new()
            .strict()
            .without_inline_section_breaks()
            .with_title("Week 1")
            .with_font_scale(1.0);

        assert!(matches!(
            builder.parse_options.error_mode,
            parser::ErrorMode::Strict
        ));
        assert!(!builder.parse_options.inline_section_breaks);
        assert_eq!(builder.render_options.title.as_deref(), Some("Week 1"));
        assert_eq!(builder.render_options.font_scale, 1.0);
    }

    #[test]
    fn test_builder_default() {
        let builder = DocxHtml::default();
        assert!(matches!(
            builder.parse_options.error_mode,
            parser::ErrorMode::Lenient
        ));
        assert!(builder.render_options.title.is_none());
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_bytes_empty_data() {
        let data: [u8; 0] = [];
        assert!(matches!(parse_bytes(&data), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_bytes_unknown_magic() {
        let data = b"<!DOCTYPE html><html></html>";
        assert!(matches!(parse_bytes(data), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_builder_parse_invalid_bytes() {
        let result = DocxHtml::new().parse_bytes(b"not a docx");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_file() {
        assert!(matches!(
            parse_file("/nonexistent/schedule.docx"),
            Err(Error::Io(_))
        ));
    }
}
