//! Paragraph to HTML block rendering.

use crate::model::Paragraph;

use super::escape::escape_html;
use super::style::{style_attribute, RunStyleMapper};

/// Block element chosen for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// Generic `<p>` block
    Paragraph,
    /// `<h1>`..`<h6>`
    Heading(u8),
}

impl BlockTag {
    /// Pick the tag for a paragraph from its heading level.
    pub fn for_paragraph(para: &Paragraph) -> Self {
        match para.heading_level() {
            Some(level) => BlockTag::Heading(level.clamp(1, 6)),
            None => BlockTag::Paragraph,
        }
    }

    /// Element name.
    pub fn name(&self) -> String {
        match self {
            BlockTag::Paragraph => "p".to_string(),
            BlockTag::Heading(level) => format!("h{}", level),
        }
    }
}

/// Render one paragraph as a single HTML block.
pub fn render_paragraph(para: &Paragraph, mapper: &RunStyleMapper) -> String {
    let tag = BlockTag::for_paragraph(para).name();
    let alignment = para.style.alignment;

    let mut html = String::new();
    html.push('<');
    html.push_str(&tag);
    if !alignment.is_left() {
        html.push_str(&format!(r#" style="text-align: {}""#, alignment.as_css()));
    }
    html.push('>');

    for run in &para.runs {
        let text = escape_html(&run.text);
        match mapper.map(run) {
            Some(declarations) => {
                html.push_str(&format!(
                    r#"<span style="{}">{}</span>"#,
                    style_attribute(&declarations),
                    text
                ));
            }
            None => html.push_str(&text),
        }
    }

    html.push_str("</");
    html.push_str(&tag);
    html.push('>');
    html
}
