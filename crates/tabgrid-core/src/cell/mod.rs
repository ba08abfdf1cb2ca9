//! Cell-related types and utilities
//!
//! This module contains:
//! - [`Cell`] - One grid slot, holding an optional [`CellValue`]
//! - [`CellValue`] - The value stored in a cell
//! - [`Coordinate`] - A cell's location (row, column), 1-based
//! - [`column_index`] / [`column_label`] - Column letters to numbers and back

mod address;
mod value;

pub use address::{column_index, column_label, parse_column_label, Axis, Coordinate};
pub use value::CellValue;

/// A single cell
///
/// Cells are immutable: writing to a grid slot replaces the whole cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    value: Option<CellValue>,
}

impl Cell {
    /// Create a cell with no value
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Create a cell holding `value` (`None` leaves it empty)
    pub fn new(value: Option<CellValue>) -> Self {
        Self { value }
    }

    /// Create a cell holding a value
    pub fn with_value<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// The stored value, if any
    pub fn value(&self) -> Option<&CellValue> {
        self.value.as_ref()
    }

    /// Check if the cell has no value
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Render the cell as text; cells without a value render as `""`
    pub fn render(&self) -> String {
        self.value.as_ref().map(CellValue::render).unwrap_or_default()
    }
}

impl From<CellValue> for Cell {
    fn from(value: CellValue) -> Self {
        Self::new(Some(value))
    }
}
