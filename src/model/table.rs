//! Table types.
//!
//! Cells carry raw merge markers as they appear in the source. The
//! logical grid with resolved row and column spans is derived at render
//! time (see [`crate::render::resolve_grid`]).

use super::{Alignment, Paragraph};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row measured in grid columns.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(TableRow::grid_width).max().unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if any cell carries a merge marker.
    pub fn has_merged_cells(&self) -> bool {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .any(|c| c.grid_span > 1 || c.vertical_merge != VerticalMerge::None)
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Number of grid columns the raw cells of this row cover.
    pub fn grid_width(&self) -> usize {
        self.cells.iter().map(TableCell::span).sum()
    }

    /// Find the raw cell whose grid position starts at `column`.
    ///
    /// Returns `None` when the row is too short or a wider cell straddles
    /// that column.
    pub fn cell_starting_at(&self, column: usize) -> Option<&TableCell> {
        let mut start = 0;
        for cell in &self.cells {
            if start == column {
                return Some(cell);
            }
            if start > column {
                return None;
            }
            start += cell.span();
        }
        None
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A raw table cell as found in the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub content: Vec<Paragraph>,

    /// Number of grid columns this cell spans
    pub grid_span: u16,

    /// Vertical merge marker
    pub vertical_merge: VerticalMerge,
}

impl TableCell {
    /// Create a new cell with text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(vec![Paragraph::with_text(text)])
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::with_content(Vec::new())
    }

    /// Create a cell with multiple paragraphs.
    pub fn with_content(content: Vec<Paragraph>) -> Self {
        Self {
            content,
            grid_span: 1,
            vertical_merge: VerticalMerge::None,
        }
    }

    /// Create an empty cell continuing the vertical merge above it.
    pub fn continuation() -> Self {
        Self::empty().vmerge(VerticalMerge::Continue)
    }

    /// Set the horizontal span and return self.
    pub fn colspan(mut self, span: u16) -> Self {
        self.grid_span = span.max(1);
        self
    }

    /// Set the vertical merge marker and return self.
    pub fn vmerge(mut self, state: VerticalMerge) -> Self {
        self.vertical_merge = state;
        self
    }

    /// Horizontal span, never less than one.
    pub fn span(&self) -> usize {
        usize::from(self.grid_span.max(1))
    }

    /// Alignment of the first paragraph, or left.
    pub fn alignment(&self) -> Alignment {
        self.content
            .first()
            .map(|p| p.style.alignment)
            .unwrap_or_default()
    }

    /// Whether the first paragraph is a heading.
    pub fn starts_with_heading(&self) -> bool {
        self.content.first().is_some_and(Paragraph::is_heading)
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Vertical merge marker of a raw cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalMerge {
    /// Not part of a vertical merge
    #[default]
    None,
    /// First cell of a vertical merge
    Start,
    /// Continues the merge from the row above
    Continue,
}
