//! Logical grid resolution for tables with merged cells.
//!
//! Raw rows list cells with a horizontal span and a vertical merge marker.
//! Resolution walks the rows top to bottom and turns those markers into
//! origin cells with explicit row and column spans. Every grid position is
//! either an origin, covered by exactly one origin, or vacant (past the end
//! of a short row).

use crate::model::{Table, TableCell, VerticalMerge};

/// State of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSlot {
    /// Top-left position of the origin with this index
    Origin(usize),
    /// Covered by the span of the origin with this index
    Covered(usize),
    /// Not present in the source row
    Vacant,
}

/// An origin cell of the logical grid.
#[derive(Debug, Clone, Copy)]
pub struct GridCell<'t> {
    /// Row of the top-left position
    pub row: usize,
    /// Column of the top-left position
    pub col: usize,
    /// Number of rows spanned (at least 1)
    pub row_span: usize,
    /// Number of columns spanned (at least 1)
    pub col_span: usize,
    /// Raw cell holding the content
    pub cell: &'t TableCell,
}

impl GridCell<'_> {
    /// Whether the cell spans more than one position.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }
}

/// Fully resolved table grid.
#[derive(Debug, Clone)]
pub struct TableGrid<'t> {
    origins: Vec<GridCell<'t>>,
    slots: Vec<Vec<GridSlot>>,
}

impl<'t> TableGrid<'t> {
    /// Origin cells in row-major order.
    pub fn origins(&self) -> &[GridCell<'t>] {
        &self.origins
    }

    /// State of a grid position.
    pub fn slot(&self, row: usize, col: usize) -> GridSlot {
        self.slots
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(GridSlot::Vacant)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.slots.len()
    }

    /// Width of the widest resolved row.
    pub fn column_count(&self) -> usize {
        self.slots.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of origins spanning more than one position.
    pub fn merged_count(&self) -> usize {
        self.origins.iter().filter(|o| o.is_merged()).count()
    }
}

/// Covered-position tracker owned by a single resolution pass.
struct GridState {
    slots: Vec<Vec<GridSlot>>,
}

impl GridState {
    fn new(rows: usize) -> Self {
        Self {
            slots: vec![Vec::new(); rows],
        }
    }

    fn get(&self, row: usize, col: usize) -> GridSlot {
        self.slots
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(GridSlot::Vacant)
    }

    fn is_covered(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), GridSlot::Covered(_))
    }

    fn set(&mut self, row: usize, col: usize, slot: GridSlot) {
        let cells = &mut self.slots[row];
        if cells.len() <= col {
            cells.resize(col + 1, GridSlot::Vacant);
        }
        cells[col] = slot;
    }

    /// Columns available from `col` before running into a covered position.
    fn free_width(&self, row: usize, col: usize, wanted: usize) -> usize {
        (0..wanted)
            .take_while(|offset| !self.is_covered(row, col + offset))
            .count()
            .max(1)
    }

    /// Mark the span rectangle: origin at its top-left, covered elsewhere.
    fn claim(&mut self, origin: &GridCell<'_>, index: usize) {
        for row in origin.row..origin.row + origin.row_span {
            for col in origin.col..origin.col + origin.col_span {
                let slot = if row == origin.row && col == origin.col {
                    GridSlot::Origin(index)
                } else {
                    GridSlot::Covered(index)
                };
                self.set(row, col, slot);
            }
        }
    }
}

/// Resolve the raw merge markers of a table into a logical grid.
///
/// Continuation cells sitting on a covered position occupy it and emit
/// nothing. Other cells first skip covered positions, so rows that omit
/// cells under a vertical span still line up.
pub fn resolve_grid(table: &Table) -> TableGrid<'_> {
    let mut state = GridState::new(table.rows.len());
    let mut origins: Vec<GridCell<'_>> = Vec::new();

    for (row, raw_row) in table.rows.iter().enumerate() {
        let mut col = 0;

        for cell in &raw_row.cells {
            if cell.vertical_merge == VerticalMerge::Continue {
                if state.is_covered(row, col) {
                    col += cell.span();
                    continue;
                }
                log::warn!(
                    "Vertical merge continuation at row {}, column {} has no start; rendering it as a plain cell",
                    row,
                    col
                );
            }

            while state.is_covered(row, col) {
                col += 1;
            }

            let col_span = state.free_width(row, col, cell.span());
            let row_span = match cell.vertical_merge {
                VerticalMerge::Start => 1 + continuation_depth(table, &state, row, col, col_span),
                _ => 1,
            };

            let origin = GridCell {
                row,
                col,
                row_span,
                col_span,
                cell,
            };
            state.claim(&origin, origins.len());
            origins.push(origin);
            col += col_span;
        }
    }

    let grid = TableGrid {
        origins,
        slots: state.slots,
    };
    log::debug!(
        "Resolved table grid: {} rows, {} columns, {} origins, {} merged",
        grid.row_count(),
        grid.column_count(),
        grid.origins.len(),
        grid.merged_count()
    );
    grid
}

/// Count consecutive rows below `row` continuing a merge at `col`.
///
/// Stops at the first row without a continuation cell starting at that
/// column, including rows too short to reach it.
fn continuation_depth(
    table: &Table,
    state: &GridState,
    row: usize,
    col: usize,
    col_span: usize,
) -> usize {
    let mut depth = 0;

    for (next_row, raw_row) in table.rows.iter().enumerate().skip(row + 1) {
        let continues = raw_row
            .cell_starting_at(col)
            .is_some_and(|c| c.vertical_merge == VerticalMerge::Continue);
        if !continues {
            break;
        }
        if (col..col + col_span).any(|c| state.is_covered(next_row, c)) {
            break;
        }
        depth += 1;
    }

    depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableRow;

    fn spans(grid: &TableGrid<'_>) -> Vec<(usize, usize, usize, usize)> {
        grid.origins()
            .iter()
            .map(|o| (o.row, o.col, o.row_span, o.col_span))
            .collect()
    }

    #[test]
    fn test_plain_table_is_one_origin_per_cell() {
        let mut table = Table::new();
        table.add_row(TableRow::from_strings(["a", "b", "c"]));
        table.add_row(TableRow::from_strings(["d", "e", "f"]));

        let grid = resolve_grid(&table);
        assert_eq!(grid.origins().len(), 6);
        assert!(grid.origins().iter().all(|o| !o.is_merged()));
        assert_eq!(grid.column_count(), 3);
    }

    #[test]
    fn test_horizontal_span() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![
            TableCell::text("wide").colspan(3),
            TableCell::text("x"),
        ]));

        let grid = resolve_grid(&table);
        assert_eq!(spans(&grid), vec![(0, 0, 1, 3), (0, 3, 1, 1)]);
        assert_eq!(grid.slot(0, 1), GridSlot::Covered(0));
        assert_eq!(grid.slot(0, 2), GridSlot::Covered(0));
        assert_eq!(grid.slot(0, 3), GridSlot::Origin(1));
    }

    #[test]
    fn test_vertical_span_with_continuation_cells() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![
            TableCell::text("Mon").vmerge(VerticalMerge::Start),
            TableCell::text("9:00"),
        ]));
        table.add_row(TableRow::new(vec![
            TableCell::continuation(),
            TableCell::text("10:00"),
        ]));
        table.add_row(TableRow::new(vec![
            TableCell::continuation(),
            TableCell::text("11:00"),
        ]));

        let grid = resolve_grid(&table);
        assert_eq!(
            spans(&grid),
            vec![(0, 0, 3, 1), (0, 1, 1, 1), (1, 1, 1, 1), (2, 1, 1, 1)]
        );
        assert_eq!(grid.slot(2, 0), GridSlot::Covered(0));
    }

    #[test]
    fn test_vertical_span_ends_at_plain_cell() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![
            TableCell::text("Mon").vmerge(VerticalMerge::Start),
            TableCell::text("9:00"),
        ]));
        table.add_row(TableRow::new(vec![
            TableCell::continuation(),
            TableCell::text("10:00"),
        ]));
        table.add_row(TableRow::from_strings(["Tue", "9:00"]));

        let grid = resolve_grid(&table);
        assert_eq!(grid.origins()[0].row_span, 2);
        assert_eq!(grid.slot(2, 0), GridSlot::Origin(3));
    }

    #[test]
    fn test_none_does_not_extend_span() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![
            TableCell::text("a").vmerge(VerticalMerge::Start)
        ]));
        table.add_row(TableRow::new(vec![TableCell::empty()]));

        let grid = resolve_grid(&table);
        assert_eq!(spans(&grid), vec![(0, 0, 1, 1), (1, 0, 1, 1)]);
    }

    #[test]
    fn test_orphan_continuation_becomes_plain_cell() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![
            TableCell::text("a"),
            TableCell::continuation(),
        ]));

        let grid = resolve_grid(&table);
        assert_eq!(spans(&grid), vec![(0, 0, 1, 1), (0, 1, 1, 1)]);
    }

    #[test]
    fn test_ragged_row_stops_scan() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![
            TableCell::text("a"),
            TableCell::text("b").vmerge(VerticalMerge::Start),
        ]));
        table.add_row(TableRow::new(vec![TableCell::text("c")]));
        table.add_row(TableRow::new(vec![
            TableCell::text("d"),
            TableCell::continuation(),
        ]));

        let grid = resolve_grid(&table);
        assert_eq!(grid.origins()[1].row_span, 1);
        assert_eq!(grid.slot(1, 1), GridSlot::Vacant);
        // The continuation below the gap has nothing to continue.
        assert_eq!(grid.origins().len(), 5);
    }

    #[test]
    fn test_rectangles_are_disjoint() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![
            TableCell::text("a").colspan(2).vmerge(VerticalMerge::Start),
            TableCell::text("b"),
            TableCell::text("c").vmerge(VerticalMerge::Start),
        ]));
        table.add_row(TableRow::new(vec![
            TableCell::continuation().colspan(2),
            TableCell::text("d"),
        ]));
        table.add_row(TableRow::new(vec![
            TableCell::text("e"),
            TableCell::continuation(),
            TableCell::text("f").colspan(3),
        ]));

        let grid = resolve_grid(&table);
        let area: usize = grid.origins().iter().map(|o| o.row_span * o.col_span).sum();
        let mut occupied = 0;
        for row in 0..grid.row_count() {
            for col in 0..grid.column_count() {
                match grid.slot(row, col) {
                    GridSlot::Origin(i) | GridSlot::Covered(i) => {
                        let o = &grid.origins()[i];
                        assert!(row >= o.row && row < o.row + o.row_span);
                        assert!(col >= o.col && col < o.col + o.col_span);
                        occupied += 1;
                    }
                    GridSlot::Vacant => {}
                }
            }
        }
        assert_eq!(occupied, area);
        assert_eq!(area, 12);
        assert_eq!(grid.origins()[0].row_span, 2);
        assert_eq!(grid.origins()[2].row_span, 1);
    }

    #[test]
    fn test_block_merge() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![
            TableCell::text("block")
                .colspan(2)
                .vmerge(VerticalMerge::Start),
            TableCell::text("x"),
        ]));
        table.add_row(TableRow::new(vec![
            TableCell::continuation().colspan(2),
            TableCell::text("y"),
        ]));

        let grid = resolve_grid(&table);
        assert_eq!(spans(&grid), vec![(0, 0, 2, 2), (0, 2, 1, 1), (1, 2, 1, 1)]);
        assert_eq!(grid.merged_count(), 1);
        assert_eq!(grid.slot(1, 1), GridSlot::Covered(0));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        let grid = resolve_grid(&table);
        assert_eq!(grid.row_count(), 0);
        assert!(grid.origins().is_empty());
    }
}
