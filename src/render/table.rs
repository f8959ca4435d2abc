//! Merge-aware HTML table rendering.

use crate::model::Table;

use super::grid::{resolve_grid, GridCell, TableGrid};
use super::paragraph::render_paragraph;
use super::style::RunStyleMapper;

/// Placeholder body for cells without renderable paragraphs.
const EMPTY_CELL: &str = "&nbsp;";

/// Render a table, resolving merges first.
pub fn render_table(table: &Table, mapper: &RunStyleMapper) -> String {
    render_grid(&resolve_grid(table), mapper)
}

/// Render an already resolved grid inside a scroll container.
pub(crate) fn render_grid(grid: &TableGrid<'_>, mapper: &RunStyleMapper) -> String {
    let mut lines = vec![
        r#"<div class="table-container">"#.to_string(),
        "<table>".to_string(),
    ];

    // Origins are row-major, so one pass over them covers every row.
    let mut origins = grid.origins().iter().peekable();
    for row in 0..grid.row_count() {
        lines.push("<tr>".to_string());
        while let Some(origin) = origins.next_if(|o| o.row == row) {
            lines.push(render_cell(origin, mapper));
        }
        lines.push("</tr>".to_string());
    }

    lines.push("</table>".to_string());
    lines.push("</div>".to_string());
    lines.join("\n")
}

fn render_cell(origin: &GridCell<'_>, mapper: &RunStyleMapper) -> String {
    let cell = origin.cell;
    let mut attrs = Vec::new();

    if origin.col_span > 1 {
        attrs.push(format!(r#"colspan="{}""#, origin.col_span));
    }
    if origin.row_span > 1 {
        attrs.push(format!(r#"rowspan="{}""#, origin.row_span));
    }

    let alignment = cell.alignment();
    if !alignment.is_left() {
        attrs.push(format!(r#"style="text-align: {}""#, alignment.as_css()));
    }

    let mut classes = Vec::new();
    if origin.row == 0 {
        classes.push("first-row");
    }
    if origin.col == 0 {
        classes.push("first-col");
    }
    if !classes.is_empty() {
        attrs.push(format!(r#"class="{}""#, classes.join(" ")));
    }

    let attr_str = if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs.join(" "))
    };

    let paragraphs: Vec<String> = cell
        .content
        .iter()
        .filter(|p| p.is_renderable())
        .map(|p| render_paragraph(p, mapper))
        .collect();
    let content = if paragraphs.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        paragraphs.join("<br>")
    };

    let is_header = (origin.row == 0 || origin.col == 0) && cell.starts_with_heading();
    let tag = if is_header { "th" } else { "td" };

    format!("<{tag}{attr_str}>{content}</{tag}>")
}
