//! Rendering result with metadata and statistics.

use crate::model::Metadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML page
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: RenderStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Paragraphs emitted as `<p>`
    pub paragraph_count: u32,

    /// Paragraphs emitted as `<h1>`..`<h6>`
    pub heading_count: u32,

    /// Paragraphs dropped for having no text and no runs
    pub skipped_paragraph_count: u32,

    /// Tables emitted
    pub table_count: u32,

    /// Origin cells emitted across all tables
    pub cell_count: u32,

    /// Origin cells spanning more than one grid position
    pub merged_cell_count: u32,

    /// Section separators emitted
    pub section_break_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment skipped paragraph count.
    pub fn add_skipped_paragraph(&mut self) {
        self.skipped_paragraph_count += 1;
    }

    /// Record one table with its origin and merged cell counts.
    pub fn add_table(&mut self, cells: usize, merged: usize) {
        self.table_count += 1;
        self.cell_count += cells as u32;
        self.merged_cell_count += merged as u32;
    }

    /// Increment section break count.
    pub fn add_section_break(&mut self) {
        self.section_break_count += 1;
    }

    /// Number of top-level blocks written to the body.
    pub fn emitted_blocks(&self) -> u32 {
        self.paragraph_count + self.heading_count + self.table_count + self.section_break_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_table_accumulates_cells() {
        let mut stats = RenderStats::new();
        stats.add_table(6, 1);
        stats.add_table(4, 0);

        assert_eq!(stats.table_count, 2);
        assert_eq!(stats.cell_count, 10);
        assert_eq!(stats.merged_cell_count, 1);
    }

    #[test]
    fn test_emitted_blocks_ignores_skipped_paragraphs() {
        let mut stats = RenderStats::new();
        stats.add_paragraph();
        stats.add_heading();
        stats.add_skipped_paragraph();
        stats.add_table(1, 0);
        stats.add_section_break();

        assert_eq!(stats.emitted_blocks(), 4);

        let result = RenderResult::new("<html></html>".to_string(), Metadata::default(), stats);
        assert_eq!(result.content_len(), 13);
        assert_eq!(result.stats.skipped_paragraph_count, 1);
    }
}
