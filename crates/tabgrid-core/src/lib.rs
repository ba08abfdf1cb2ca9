//! # tabgrid-core
//!
//! Core data structures for the tabgrid spreadsheet library.
//!
//! This crate provides the in-memory grid and the types it is built from:
//! - [`CellValue`] - The scalar stored in a cell (text, integer, float, boolean)
//! - [`Cell`] - One slot of the grid, holding zero or one value
//! - [`Coordinate`] and [`column_index`] - 1-based addressing and column labels
//! - [`Row`] and [`Grid`] - The auto-expanding table itself
//!
//! ## Example
//!
//! ```rust
//! use tabgrid_core::{column_index, Coordinate, Grid};
//!
//! let mut grid = Grid::new();
//!
//! // Build a table column by column
//! let next = grid.set_headers(["Name", "Qty"], 1).unwrap();
//! grid.set_header_and_value("Price", 9.5, next).unwrap();
//! grid.set_at(2, 1, "Widget").unwrap();
//! grid.set_at(2, 2, 3).unwrap();
//!
//! // Address columns by letter
//! let qty = Coordinate::new(2, column_index("B"));
//! assert_eq!(grid.get(qty).and_then(|v| v.as_integer()), Some(3));
//!
//! assert_eq!(grid.serialize(), "Name\tQty\tPrice\nWidget\t3\t9.5");
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod row;

// Re-exports for convenience
pub use cell::{column_index, column_label, parse_column_label, Axis, Cell, CellValue, Coordinate};
pub use error::{Error, Result};
pub use grid::{Grid, Rows};
pub use row::Row;

/// The smallest valid row or column index
pub const MINIMUM: Axis = 1;
