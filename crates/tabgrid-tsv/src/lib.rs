//! # tabgrid-tsv
//!
//! Tab-separated text writer for tabgrid.
//!
//! With default options the output is byte-for-byte what
//! [`Grid::serialize`](tabgrid_core::Grid::serialize) returns. Quoting,
//! CRLF line endings and a trailing terminator are opt-in.

mod error;
mod options;
mod writer;

pub use error::{TsvError, TsvResult};
pub use options::{LineTerminator, Quoting, TsvWriteOptions};
pub use writer::TsvWriter;
