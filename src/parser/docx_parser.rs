//! DOCX package reader using the zip crate.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};
use crate::model::{Document, Metadata};

use super::body::parse_body;
use super::core_props::parse_core_properties;
use super::options::{ErrorMode, ParseOptions};
use super::styles::StyleMap;
use super::xml;

const PACKAGE_RELS: &str = "_rels/.rels";
const DEFAULT_MAIN_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const CORE_PROPERTIES_PART: &str = "docProps/core.xml";
const OFFICE_DOCUMENT_REL: &str = "/officeDocument";
/// Upper bound on the buffer reserved from a part's declared size.
const MAX_PART_PREALLOC: u64 = 1 << 20;

/// DOCX document parser.
pub struct DocxParser {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_owned_bytes(data, options)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        Self::from_owned_bytes(data.to_vec(), options)
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_owned_bytes(data, options)
    }

    fn from_owned_bytes(data: Vec<u8>, options: ParseOptions) -> Result<Self> {
        detect_format_from_bytes(&data)?;
        let archive = ZipArchive::new(Cursor::new(data))?;
        log::debug!("Opened DOCX package with {} entries", archive.len());
        Ok(Self { archive, options })
    }

    /// Parse the document and return a structured Document.
    pub fn parse(&mut self) -> Result<Document> {
        let main_part = self.main_part_name()?;
        let document_xml = self
            .read_part(&main_part)?
            .ok_or_else(|| Error::MissingPart(main_part.clone()))?;

        let styles = self.load_styles()?;
        let metadata = self.load_metadata()?;
        let blocks = parse_body(&document_xml, &styles, &self.options)?;

        Ok(Document { metadata, blocks })
    }

    /// Locate the main document part through the package relationships.
    fn main_part_name(&mut self) -> Result<String> {
        let Some(rels) = self.read_part(PACKAGE_RELS)? else {
            return Ok(DEFAULT_MAIN_PART.to_string());
        };

        let mut reader = Reader::from_reader(rels.as_slice());
        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e)
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let is_main = xml::attr(&e, b"Type")?
                        .is_some_and(|t| t.ends_with(OFFICE_DOCUMENT_REL));
                    if is_main {
                        if let Some(target) = xml::attr(&e, b"Target")? {
                            return Ok(target.trim_start_matches('/').to_string());
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(DEFAULT_MAIN_PART.to_string())
    }

    fn load_styles(&mut self) -> Result<StyleMap> {
        let Some(bytes) = self.read_part(STYLES_PART)? else {
            return Ok(StyleMap::new());
        };
        self.optional(StyleMap::parse(&bytes), STYLES_PART)
    }

    fn load_metadata(&mut self) -> Result<Metadata> {
        let Some(bytes) = self.read_part(CORE_PROPERTIES_PART)? else {
            return Ok(Metadata::default());
        };
        self.optional(parse_core_properties(&bytes), CORE_PROPERTIES_PART)
    }

    /// Apply the error mode to the outcome of an optional part.
    fn optional<T: Default>(&self, result: Result<T>, part: &str) -> Result<T> {
        match (result, self.options.error_mode) {
            (Ok(value), _) => Ok(value),
            (Err(e), ErrorMode::Lenient) => {
                log::warn!("Ignoring malformed part {}: {}", part, e);
                Ok(T::default())
            }
            (Err(e), ErrorMode::Strict) => Err(e),
        }
    }

    /// Read a package part, `None` if it does not exist.
    fn read_part(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        // The declared size comes from the archive and is not trusted.
        let mut data = Vec::with_capacity(file.size().min(MAX_PART_PREALLOC) as usize);
        file.read_to_end(&mut data)?;
        Ok(Some(data))
    }
}
