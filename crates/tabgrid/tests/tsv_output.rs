//! End-to-end tests for writing grids out through the TSV writer

use pretty_assertions::assert_eq;
use tabgrid::prelude::*;
use tabgrid::{LineTerminator, Quoting};

fn report() -> Grid {
    let mut grid = Grid::new();
    let col = grid
        .set_header_and_values("city", ["Oslo", "Rome, IT"], 1)
        .unwrap();
    grid.set_header_and_values("temp", [-3.5, 14.0], col).unwrap();
    grid
}

#[test]
fn test_to_tsv_default_matches_serialize() {
    let grid = report();
    let out = grid.to_tsv(&TsvWriteOptions::default()).unwrap();
    assert_eq!(out, "city\ttemp\nOslo\t-3.5\nRome, IT\t14");
    assert_eq!(out, grid.serialize());
}

#[test]
fn test_to_tsv_crlf_trailing() {
    let grid = report();
    let opts = TsvWriteOptions {
        line_terminator: LineTerminator::CRLF,
        trailing_terminator: true,
        ..Default::default()
    };
    let out = grid.to_tsv(&opts).unwrap();
    assert_eq!(out, "city\ttemp\r\nOslo\t-3.5\r\nRome, IT\t14\r\n");
}

#[test]
fn test_save_tsv() {
    let grid = report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.tsv");

    grid.save(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), grid.serialize());
}

#[test]
fn test_save_csv_is_quoted() {
    let grid = report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    grid.save(&path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "city,temp\nOslo,-3.5\n\"Rome, IT\",14"
    );
}

#[test]
fn test_save_to_missing_directory_fails() {
    let grid = report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.tsv");

    assert!(grid.save(&path).is_err());
}

#[test]
fn test_writer_direct() {
    let mut grid = Grid::new();
    grid.set_headers(["tab\there", "ok"], 1).unwrap();

    let mut buf = Vec::new();
    let opts = TsvWriteOptions {
        quoting: Quoting::Rfc4180,
        ..Default::default()
    };
    TsvWriter::write(&grid, &mut buf, &opts).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "\"tab\there\"\tok");
}
