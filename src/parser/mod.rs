//! DOCX parsing module.

mod body;
mod core_props;
mod docx_parser;
mod options;
mod styles;
mod xml;

pub use core_props::parse_core_properties;
pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions};
pub use styles::{ResolvedStyle, StyleMap};
