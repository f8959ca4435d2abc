//! File-to-file conversion from `.docx` to `.html`.
//!
//! The whole page is rendered in memory before the output file is touched,
//! so a failed conversion never leaves a partial `.html` behind.
//!
//! # Example
//!
//! ```no_run
//! use docxhtml::convert::{convert_file, ConvertOptions};
//!
//! fn main() -> docxhtml::Result<()> {
//!     let outcome = convert_file("schedule.docx", &ConvertOptions::default())?;
//!     println!("Wrote {}", outcome.output_path.display());
//!     Ok(())
//! }
//! ```

use crate::detect::{has_docx_extension, html_output_path, DOCX_EXTENSION};
use crate::error::{Error, Result};
use crate::parser::{DocxParser, ParseOptions};
use crate::render::{self, RenderOptions, RenderResult, RenderStats};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render = self.render.with_title(title);
        self
    }
}

/// Result of a file conversion.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    /// Path of the written HTML file
    pub output_path: PathBuf,

    /// Rendering statistics
    pub stats: RenderStats,
}

/// Convert a `.docx` file into an `.html` file next to it.
///
/// Fails with [`Error::Usage`] for a path without the `.docx` extension,
/// [`Error::SourceOpen`] when the package cannot be read or parsed, and
/// [`Error::OutputWrite`] when the result cannot be written.
pub fn convert_file<P: AsRef<Path>>(input: P, options: &ConvertOptions) -> Result<ConvertOutcome> {
    let input = input.as_ref();
    if !has_docx_extension(input) {
        return Err(Error::Usage(format!(
            "Input file must have the .{} extension: {}",
            DOCX_EXTENSION,
            input.display()
        )));
    }

    let document = DocxParser::open_with_options(input, options.parse.clone())
        .and_then(|mut parser| parser.parse())
        .map_err(|e| Error::SourceOpen {
            path: input.to_path_buf(),
            message: e.to_string(),
        })?;

    let result = render::to_html_with_stats(&document, &options.render)?;

    let output_path = html_output_path(input);
    fs::write(&output_path, result.content.as_bytes()).map_err(|source| Error::OutputWrite {
        path: output_path.clone(),
        source,
    })?;

    log::info!(
        "Converted {} to {} ({} bytes)",
        input.display(),
        output_path.display(),
        result.content_len()
    );

    Ok(ConvertOutcome {
        output_path,
        stats: result.stats,
    })
}

/// Convert an in-memory `.docx` package to an HTML page.
pub fn convert_bytes(data: &[u8], options: &ConvertOptions) -> Result<RenderResult> {
    let mut parser = DocxParser::from_bytes_with_options(data, options.parse.clone())?;
    let document = parser.parse()?;
    render::to_html_with_stats(&document, &options.render)
}
