//! Grid type

use std::fmt;

use crate::cell::{Axis, CellValue, Coordinate};
use crate::error::{Error, Result};
use crate::row::Row;
use crate::MINIMUM;

/// Iterator over the rows of a [`Grid`], top to bottom
pub type Rows<'a> = std::slice::Iter<'a, Row>;

/// An auto-expanding two-dimensional table of cells
///
/// The grid starts empty and grows whenever a value is written beyond its
/// current bounds. Rows and columns only ever grow, and every row always
/// has exactly [`column_count`](Grid::column_count) cells.
///
/// The `set_header*` and `set_label*` helpers return the next free column
/// (or row) so a table can be filled in without tracking offsets:
///
/// ```
/// use tabgrid_core::Grid;
///
/// let mut grid = Grid::new();
/// let col = grid.set_header_and_values("Year", [2023, 2024], 1).unwrap();
/// let col = grid.set_header_and_values("Sales", [1.5, 2.25], col).unwrap();
/// assert_eq!(col, 3);
/// assert_eq!(grid.serialize(), "Year\tSales\n2023\t1.5\n2024\t2.25");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Row>,
    columns: usize,
}

impl Grid {
    /// Create an empty grid (no rows, no columns)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid pre-sized to `rows` x `columns` empty cells
    pub fn with_size(rows: usize, columns: usize) -> Self {
        let mut grid = Self::new();
        grid.expand_columns(columns);
        grid.expand_rows(rows);
        grid
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Check if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows
    pub fn rows(&self) -> Rows<'_> {
        self.rows.iter()
    }

    /// Get a row by 1-based index
    pub fn row(&self, row: Axis) -> Option<&Row> {
        let idx = (row as usize).checked_sub(1)?;
        self.rows.get(idx)
    }

    // === Expansion ===

    /// Grow every row (and all future rows) to `columns` cells
    ///
    /// No-op if the grid is already at least that wide.
    pub fn expand_columns(&mut self, columns: usize) {
        if columns > self.columns {
            log::trace!("expanding grid columns {} -> {}", self.columns, columns);
            self.columns = columns;
            for row in &mut self.rows {
                row.expand(columns);
            }
        }
    }

    /// Append rows at the current column width until there are `rows` rows
    ///
    /// No-op if the grid already has at least that many.
    pub fn expand_rows(&mut self, rows: usize) {
        if rows > self.rows.len() {
            log::trace!("expanding grid rows {} -> {}", self.rows.len(), rows);
            let columns = self.columns;
            self.rows.resize_with(rows, || Row::new(columns));
        }
    }

    // === Cell Access ===

    /// Get the value at a coordinate
    ///
    /// Returns `None` for coordinates outside the grid and for cells with no
    /// value. Never expands the grid.
    pub fn get(&self, at: Coordinate) -> Option<&CellValue> {
        self.get_at(at.row, at.col)
    }

    /// Get the value at a row and column (both 1-based)
    pub fn get_at(&self, row: Axis, col: Axis) -> Option<&CellValue> {
        self.row(row)?.cell(col)?.value()
    }

    // === Cell Modification ===

    /// Set the value at a coordinate, growing the grid to fit
    pub fn set<V: Into<CellValue>>(&mut self, at: Coordinate, value: V) -> Result<()> {
        self.assign(at.row, at.col, Some(value.into()))
    }

    /// Set the value at a row and column (both 1-based), growing the grid to fit
    pub fn set_at<V: Into<CellValue>>(&mut self, row: Axis, col: Axis, value: V) -> Result<()> {
        self.assign(row, col, Some(value.into()))
    }

    /// Remove the value at a coordinate, growing the grid to fit
    ///
    /// The cell becomes empty, which is distinct from holding `""`.
    pub fn clear(&mut self, at: Coordinate) -> Result<()> {
        self.assign(at.row, at.col, None)
    }

    /// Write `header` at (`MINIMUM`, `col`) and `value` directly below it
    ///
    /// Returns the next column.
    pub fn set_header_and_value<H, V>(&mut self, header: H, value: V, col: Axis) -> Result<Axis>
    where
        H: Into<String>,
        V: Into<CellValue>,
    {
        self.set_header_and_value_in_row(header, value, col, MINIMUM)
    }

    /// Write `header` at (`row`, `col`) and `value` at (`row + 1`, `col`)
    ///
    /// Returns the next column.
    pub fn set_header_and_value_in_row<H, V>(
        &mut self,
        header: H,
        value: V,
        col: Axis,
        row: Axis,
    ) -> Result<Axis>
    where
        H: Into<String>,
        V: Into<CellValue>,
    {
        self.set_at(row, col, header.into())?;
        self.set_at(row + 1, col, value)?;
        Ok(col + 1)
    }

    /// Write `header` at (`MINIMUM`, `col`) and `values` down the column below it
    ///
    /// Returns the next column.
    pub fn set_header_and_values<H, I>(&mut self, header: H, values: I, col: Axis) -> Result<Axis>
    where
        H: Into<String>,
        I: IntoIterator,
        I::Item: Into<CellValue>,
    {
        self.set_header_and_values_in_row(header, values, col, MINIMUM)
    }

    /// Write `header` at (`row`, `col`) and `values` at `row + 1`, `row + 2`, ...
    ///
    /// Returns the next column.
    pub fn set_header_and_values_in_row<H, I>(
        &mut self,
        header: H,
        values: I,
        col: Axis,
        row: Axis,
    ) -> Result<Axis>
    where
        H: Into<String>,
        I: IntoIterator,
        I::Item: Into<CellValue>,
    {
        self.set_at(row, col, header.into())?;

        let mut at = row;
        for value in values {
            at += 1;
            self.set_at(at, col, value)?;
        }
        Ok(col + 1)
    }

    /// Write `headers` across row `MINIMUM`, starting at `col`
    ///
    /// Returns the column after the last header written (`col` itself if
    /// `headers` is empty).
    pub fn set_headers<I>(&mut self, headers: I, col: Axis) -> Result<Axis>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut at = col;
        for header in headers {
            self.set_at(MINIMUM, at, header.into())?;
            at += 1;
        }
        Ok(at)
    }

    /// Write `label` in the first column of `row` and `value` in the second
    ///
    /// Returns the next row.
    pub fn set_label_and_value<L, V>(&mut self, label: L, value: V, row: Axis) -> Result<Axis>
    where
        L: Into<String>,
        V: Into<CellValue>,
    {
        self.set_at(row, MINIMUM, label.into())?;
        self.set_at(row, MINIMUM + 1, value)?;
        Ok(row + 1)
    }

    // === Serialization ===

    /// Render the grid as tab-separated columns and newline-separated rows
    ///
    /// There is no trailing newline, and cell text is not escaped.
    pub fn serialize(&self) -> String {
        self.rows
            .iter()
            .map(Row::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    // === Internal ===

    fn assign(&mut self, row: Axis, col: Axis, value: Option<CellValue>) -> Result<()> {
        if row < MINIMUM {
            return Err(Error::ZeroRow { col });
        }
        if col < MINIMUM {
            return Err(Error::ZeroColumn { row });
        }

        // Columns first, so any rows appended below are created at full width
        self.expand_columns(col as usize);
        self.expand_rows(row as usize);
        self.rows[row as usize - 1].assign(value, col);
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
