//! HTML rendering for word-processing documents.

use crate::error::Result;
use crate::model::{Block, Document, Paragraph, Table};

use super::escape::escape_html;
use super::grid::resolve_grid;
use super::options::DEFAULT_TITLE;
use super::paragraph::{render_paragraph, BlockTag};
use super::style::RunStyleMapper;
use super::stylesheet::STYLESHEET;
use super::table::render_grid;
use super::{RenderOptions, RenderResult, RenderStats};

/// Separator emitted for a section break.
pub const SECTION_BREAK: &str =
    r#"<hr style="margin: 15px 0; border: 0; border-top: 1px solid #ccc;">"#;

/// Convert a document to a standalone HTML page.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = HtmlRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    mapper: RunStyleMapper,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        let mapper = RunStyleMapper::new(&options);
        Self {
            options,
            mapper,
            stats: RenderStats::new(),
        }
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to HTML with rendering statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;

        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let title = self
            .options
            .title
            .as_deref()
            .or_else(|| doc.metadata.display_title())
            .unwrap_or(DEFAULT_TITLE);

        let mut lines: Vec<String> = vec![
            "<!DOCTYPE html>".to_string(),
            "<html>".to_string(),
            "<head>".to_string(),
            r#"<meta charset="UTF-8">"#.to_string(),
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#
                .to_string(),
            format!("<title>{}</title>", escape_html(title)),
            "<style>".to_string(),
        ];
        lines.extend(STYLESHEET.iter().map(|line| line.to_string()));
        lines.push("</style>".to_string());
        lines.push("</head>".to_string());
        lines.push("<body>".to_string());

        for (index, block) in doc.blocks.iter().enumerate() {
            log::debug!("Rendering block {} ({})", index, block.kind());
            if let Some(html) = self.render_block(block) {
                lines.push(html);
            }
        }

        lines.push("</body>".to_string());
        lines.push("</html>".to_string());

        Ok(lines.join("\n"))
    }

    fn render_block(&mut self, block: &Block) -> Option<String> {
        match block {
            Block::Paragraph(para) => self.render_paragraph(para),
            Block::Table(table) => Some(self.render_table(table)),
            Block::SectionBreak => {
                if self.options.collect_stats {
                    self.stats.add_section_break();
                }
                Some(SECTION_BREAK.to_string())
            }
        }
    }

    fn render_paragraph(&mut self, para: &Paragraph) -> Option<String> {
        if !para.is_renderable() {
            if self.options.collect_stats {
                self.stats.add_skipped_paragraph();
            }
            return None;
        }

        if self.options.collect_stats {
            match BlockTag::for_paragraph(para) {
                BlockTag::Heading(_) => self.stats.add_heading(),
                BlockTag::Paragraph => self.stats.add_paragraph(),
            }
        }

        Some(render_paragraph(para, &self.mapper))
    }

    fn render_table(&mut self, table: &Table) -> String {
        let grid = resolve_grid(table);
        if self.options.collect_stats {
            self.stats
                .add_table(grid.origins().len(), grid.merged_count());
        }
        render_grid(&grid, &self.mapper)
    }
}
