//! # tabgrid
//!
//! An in-memory spreadsheet grid that grows as you write to it and
//! serializes to tab-separated text.
//!
//! ## Features
//!
//! - 1-based (row, column) addressing, with spreadsheet column letters
//! - Automatic growth on write; reads outside the grid return nothing
//! - Fluent helpers for filling in headers, value columns and label rows
//! - Tab/newline serialization, with optional RFC 4180 quoting (`tsv` feature)
//!
//! ## Example
//!
//! ```rust
//! use tabgrid::prelude::*;
//!
//! let mut grid = Grid::new();
//!
//! // Header row, then one column of values under a new header
//! let col = grid.set_headers(["Item", "Qty"], 1).unwrap();
//! grid.set_header_and_values("Note", ["fragile", ""], col).unwrap();
//!
//! grid.set(Coordinate::parse("A2").unwrap(), "Cup").unwrap();
//! grid.set(Coordinate::from_label("B", 2), 4).unwrap();
//!
//! assert_eq!(grid.serialize(), "Item\tQty\tNote\nCup\t4\tfragile\n\t\t");
//! ```

pub mod prelude;

// Re-export core types
pub use tabgrid_core::{
    column_index, column_label, parse_column_label, Axis, Cell, CellValue, Coordinate, Error,
    Grid, Result, Row, Rows, MINIMUM,
};

// Re-export I/O types
#[cfg(feature = "tsv")]
pub use tabgrid_tsv::{LineTerminator, Quoting, TsvError, TsvWriteOptions, TsvWriter};

#[cfg(feature = "tsv")]
use std::path::Path;

/// Extension trait for Grid to add file output
#[cfg(feature = "tsv")]
pub trait GridExt {
    /// Render the grid with the given writer options
    fn to_tsv(&self, options: &TsvWriteOptions) -> Result<String>;

    /// Save the grid to a file
    ///
    /// `.csv` files are written comma-delimited and quoted; anything else is
    /// written as plain tab-separated text.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

#[cfg(feature = "tsv")]
impl GridExt for Grid {
    fn to_tsv(&self, options: &TsvWriteOptions) -> Result<String> {
        TsvWriter::to_string(self, options).map_err(|e| Error::other(e.to_string()))
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let options = match extension.as_deref() {
            Some("csv") => TsvWriteOptions {
                delimiter: b',',
                ..TsvWriteOptions::quoted()
            },
            _ => TsvWriteOptions::default(),
        };

        TsvWriter::write_file(self, path, &options).map_err(|e| Error::other(e.to_string()))
    }
}
