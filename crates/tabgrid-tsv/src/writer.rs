//! TSV writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::TsvResult;
use crate::options::{LineTerminator, Quoting, TsvWriteOptions};
use tabgrid_core::{Cell, Grid, Row};

/// TSV writer
pub struct TsvWriter;

impl TsvWriter {
    /// Write a grid to a file
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &TsvWriteOptions,
    ) -> TsvResult<()> {
        let file = File::create(path)?;
        Self::write(grid, BufWriter::new(file), options)
    }

    /// Write a grid to a string
    pub fn to_string(grid: &Grid, options: &TsvWriteOptions) -> TsvResult<String> {
        let mut buf = Vec::new();
        Self::write(grid, &mut buf, options)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write a grid to a writer
    pub fn write<W: Write>(grid: &Grid, mut writer: W, options: &TsvWriteOptions) -> TsvResult<()> {
        log::debug!(
            "writing {} rows x {} columns ({:?})",
            grid.row_count(),
            grid.column_count(),
            options.quoting
        );

        match options.quoting {
            Quoting::Never => Self::write_raw(grid, &mut writer, options)?,
            Quoting::Rfc4180 => Self::write_quoted(grid, &mut writer, options)?,
        }

        writer.flush()?;
        Ok(())
    }

    fn write_raw<W: Write>(grid: &Grid, writer: &mut W, options: &TsvWriteOptions) -> TsvResult<()> {
        let terminator = options.line_terminator.as_str().as_bytes();

        for (i, row) in grid.rows().enumerate() {
            if i > 0 {
                writer.write_all(terminator)?;
            }
            for (j, cell) in row.cells().iter().enumerate() {
                if j > 0 {
                    writer.write_all(&[options.delimiter])?;
                }
                writer.write_all(cell.render().as_bytes())?;
            }
        }

        if options.trailing_terminator && !grid.is_empty() {
            writer.write_all(terminator)?;
        }
        Ok(())
    }

    fn write_quoted<W: Write>(
        grid: &Grid,
        writer: &mut W,
        options: &TsvWriteOptions,
    ) -> TsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(options.delimiter)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(terminator)
            .flexible(true);

        let term = options.line_terminator.as_str().as_bytes();
        let mut buf = Vec::new();

        for row in grid.rows() {
            // csv writes a lone empty field as `""`; keep blank rows blank
            if Self::is_blank_record(row) {
                buf.extend_from_slice(term);
                continue;
            }
            let mut csv_writer = builder.from_writer(&mut buf);
            csv_writer.write_record(row.cells().iter().map(Cell::render))?;
            csv_writer.flush()?;
        }

        // csv terminates every record; drop the last one unless asked to keep it
        if !options.trailing_terminator && buf.ends_with(term) {
            buf.truncate(buf.len() - term.len());
        }

        writer.write_all(&buf)?;
        Ok(())
    }

    /// A row with no cells, or with a single cell rendering as `""`
    fn is_blank_record(row: &Row) -> bool {
        match row.cells() {
            [] => true,
            [cell] => cell.render().is_empty(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Grid {
        let mut grid = Grid::new();
        let col = grid.set_headers(["name", "note"], 1).unwrap();
        grid.set_header_and_value("n", 3, col).unwrap();
        grid.set_at(2, 1, "a\tb").unwrap();
        grid.set_at(2, 2, "say \"hi\"").unwrap();
        grid
    }

    #[test]
    fn test_default_matches_serialize() {
        let grid = sample();
        let out = TsvWriter::to_string(&grid, &TsvWriteOptions::default()).unwrap();
        assert_eq!(out, grid.serialize());
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new();
        let opts = TsvWriteOptions {
            trailing_terminator: true,
            ..Default::default()
        };
        assert_eq!(TsvWriter::to_string(&grid, &opts).unwrap(), "");
        assert_eq!(
            TsvWriter::to_string(&grid, &TsvWriteOptions::quoted()).unwrap(),
            ""
        );
    }

    #[test]
    fn test_raw_crlf_and_trailing() {
        let mut grid = Grid::new();
        grid.set_header_and_values("H", [1, 2], 1).unwrap();

        let opts = TsvWriteOptions {
            line_terminator: LineTerminator::CRLF,
            trailing_terminator: true,
            ..Default::default()
        };
        assert_eq!(TsvWriter::to_string(&grid, &opts).unwrap(), "H\r\n1\r\n2\r\n");
    }

    #[test]
    fn test_raw_custom_delimiter() {
        let mut grid = Grid::new();
        grid.set_headers(["a", "b"], 1).unwrap();

        let opts = TsvWriteOptions {
            delimiter: b',',
            ..Default::default()
        };
        assert_eq!(TsvWriter::to_string(&grid, &opts).unwrap(), "a,b");
    }

    #[test]
    fn test_quoted_output() {
        let grid = sample();
        let out = TsvWriter::to_string(&grid, &TsvWriteOptions::quoted()).unwrap();
        assert_eq!(out, "name\tnote\tn\n\"a\tb\"\t\"say \"\"hi\"\"\"\t3");
    }

    #[test]
    fn test_quoted_newline_in_field() {
        let mut grid = Grid::new();
        grid.set_headers(["multi\nline", "plain"], 1).unwrap();
        let out = TsvWriter::to_string(&grid, &TsvWriteOptions::quoted()).unwrap();
        assert_eq!(out, "\"multi\nline\"\tplain");
    }

    #[test]
    fn test_quoted_trailing_terminator() {
        let mut grid = Grid::new();
        grid.set_headers(["a", "b"], 1).unwrap();
        let opts = TsvWriteOptions {
            trailing_terminator: true,
            ..TsvWriteOptions::quoted()
        };
        assert_eq!(TsvWriter::to_string(&grid, &opts).unwrap(), "a\tb\n");
    }

    #[test]
    fn test_quoted_blank_single_column_rows() {
        let mut grid = Grid::new();
        grid.set_header_and_values("h", ["", "x"], 1).unwrap();
        grid.expand_rows(4);

        let quoted = TsvWriter::to_string(&grid, &TsvWriteOptions::quoted()).unwrap();
        assert_eq!(quoted, "h\n\nx\n");
        assert_eq!(quoted, grid.serialize());
    }

    #[test]
    fn test_quoted_zero_column_rows() {
        let grid = Grid::with_size(2, 0);
        let quoted = TsvWriter::to_string(&grid, &TsvWriteOptions::quoted()).unwrap();
        assert_eq!(quoted, "\n");

        let opts = TsvWriteOptions {
            line_terminator: LineTerminator::CRLF,
            trailing_terminator: true,
            ..TsvWriteOptions::quoted()
        };
        assert_eq!(TsvWriter::to_string(&grid, &opts).unwrap(), "\r\n\r\n");
    }

    #[test]
    fn test_write_file() {
        let grid = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");

        TsvWriter::write_file(&grid, &path, &TsvWriteOptions::default()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, grid.serialize());
    }
}
