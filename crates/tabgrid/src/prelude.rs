//! Prelude module - common imports for tabgrid users
//!
//! ```rust
//! use tabgrid::prelude::*;
//! ```

pub use crate::{
    // Addressing
    column_index,
    column_label,
    Axis,
    // Cell types
    Cell,
    CellValue,
    Coordinate,
    // Error types
    Error,
    // Main types
    Grid,
    Result,
    Row,

    MINIMUM,
};

#[cfg(feature = "tsv")]
pub use crate::{GridExt, TsvWriteOptions, TsvWriter};
