//! Row type

use crate::cell::{Axis, Cell, CellValue};

/// One row of the grid
///
/// Columns are addressed 1-based from the outside and stored 0-based.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create a row of `columns` empty cells
    pub fn new(columns: usize) -> Self {
        Self {
            cells: vec![Cell::empty(); columns],
        }
    }

    /// Grow the row with empty cells until it has `columns` cells
    ///
    /// Never truncates.
    pub fn expand(&mut self, columns: usize) {
        if self.cells.len() < columns {
            self.cells.resize(columns, Cell::empty());
        }
    }

    /// Replace the cell at 1-based column `col` with a new cell holding `value`
    ///
    /// # Panics
    ///
    /// Panics if `col` is 0 or beyond the row's length. [`Grid`](crate::Grid)
    /// expands the row before calling this.
    pub(crate) fn assign(&mut self, value: Option<CellValue>, col: Axis) {
        let idx = col as usize - 1;
        self.cells[idx] = Cell::new(value);
    }

    /// Get the cell at 1-based column `col`
    pub fn cell(&self, col: Axis) -> Option<&Cell> {
        let idx = (col as usize).checked_sub(1)?;
        self.cells.get(idx)
    }

    /// All cells in column order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Render the row's cells joined by tabs
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(Cell::render)
            .collect::<Vec<_>>()
            .join("\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row() {
        let row = Row::new(3);
        assert_eq!(row.len(), 3);
        assert!(row.cells().iter().all(Cell::is_empty));
        assert_eq!(row.render(), "\t\t");
    }

    #[test]
    fn test_expand_never_truncates() {
        let mut row = Row::new(2);
        row.expand(5);
        assert_eq!(row.len(), 5);
        row.expand(1);
        assert_eq!(row.len(), 5);
        row.expand(5);
        assert_eq!(row.len(), 5);
    }

    #[test]
    fn test_assign_is_one_based() {
        let mut row = Row::new(3);
        row.assign(Some(CellValue::text("first")), 1);
        row.assign(Some(CellValue::Integer(3)), 3);

        assert_eq!(row.cells()[0].value(), Some(&CellValue::text("first")));
        assert_eq!(row.cell(3).and_then(Cell::value), Some(&CellValue::Integer(3)));
        assert!(row.cell(2).is_some_and(Cell::is_empty));
        assert_eq!(row.render(), "first\t\t3");
    }

    #[test]
    fn test_assign_replaces_cell() {
        let mut row = Row::new(1);
        row.assign(Some(CellValue::Integer(1)), 1);
        row.assign(None, 1);
        assert!(row.cells()[0].is_empty());
    }

    #[test]
    fn test_cell_out_of_range() {
        let row = Row::new(2);
        assert!(row.cell(0).is_none());
        assert!(row.cell(3).is_none());
    }

    #[test]
    fn test_empty_row_renders_empty() {
        assert_eq!(Row::new(0).render(), "");
        assert!(Row::default().is_empty());
    }
}
