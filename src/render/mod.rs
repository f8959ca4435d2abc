//! Rendering module for converting documents to HTML.

mod escape;
mod grid;
mod html;
mod json;
mod options;
mod paragraph;
mod result;
mod style;
mod stylesheet;
mod table;

pub use escape::escape_html;
pub use grid::{resolve_grid, GridCell, GridSlot, TableGrid};
pub use html::{to_html, to_html_with_stats, HtmlRenderer, SECTION_BREAK};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_TITLE};
pub use paragraph::{render_paragraph, BlockTag};
pub use result::{RenderResult, RenderStats};
pub use style::{format_points, style_attribute, RunStyleMapper, StyleDeclaration};
pub use stylesheet::STYLESHEET;
pub use table::render_table;
