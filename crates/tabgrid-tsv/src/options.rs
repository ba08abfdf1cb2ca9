//! TSV options

/// Options for writing TSV output
#[derive(Debug, Clone)]
pub struct TsvWriteOptions {
    /// Field delimiter (default: tab)
    pub delimiter: u8,
    /// How fields containing special characters are written
    pub quoting: Quoting,
    /// Line terminator between rows
    pub line_terminator: LineTerminator,
    /// Also terminate the last row
    pub trailing_terminator: bool,
}

impl Default for TsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            quoting: Quoting::Never,
            line_terminator: LineTerminator::LF,
            trailing_terminator: false,
        }
    }
}

impl TsvWriteOptions {
    /// Options for RFC 4180-style quoted output
    pub fn quoted() -> Self {
        Self {
            quoting: Quoting::Rfc4180,
            ..Self::default()
        }
    }
}

/// Field quoting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quoting {
    /// Write cell text verbatim, even if it contains delimiters
    #[default]
    Never,
    /// Quote fields containing the delimiter, `"`, CR or LF, doubling inner quotes
    ///
    /// Blank rows (no cells, or a single empty cell) stay blank rather than
    /// being written as `""`.
    Rfc4180,
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
}

impl LineTerminator {
    /// The terminator as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::LF => "\n",
            LineTerminator::CRLF => "\r\n",
        }
    }
}
