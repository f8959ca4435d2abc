//! Document model types for word-processing content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! DOCX parsing and HTML rendering. Blocks are kept in source order and
//! the model is never mutated once the parser has built it.

mod document;
mod paragraph;
mod table;

pub use document::{Block, Document, Metadata};
pub use paragraph::{
    heading_level_from_style_name, Alignment, Paragraph, ParagraphStyle, Rgb, TextRun, TextStyle,
};
pub use table::{Table, TableCell, TableRow, VerticalMerge};
