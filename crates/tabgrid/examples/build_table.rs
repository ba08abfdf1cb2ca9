//! Example: Build a small report column by column and print it as TSV

use tabgrid::prelude::*;

fn main() -> Result<()> {
    let mut grid = Grid::new();

    // Header row
    let col = grid.set_headers(["Name", "Value"], 1)?;

    // A computed column under its own header
    let doubled: Vec<i64> = [100, 200].iter().map(|v| v * 2).collect();
    grid.set_header_and_values("Double", doubled, col)?;

    // Data rows, addressed by column letter
    grid.set(Coordinate::from_label("A", 2), "Item 1")?;
    grid.set(Coordinate::from_label("B", 2), 100)?;
    grid.set(Coordinate::from_label("A", 3), "Item 2")?;
    grid.set(Coordinate::from_label("B", 3), 200)?;

    // Summary rows below the table
    let row = grid.row_count() as Axis + 2;
    let row = grid.set_label_and_value("Total", 300, row)?;
    grid.set_label_and_value("Ratio", 0.5, row)?;

    println!("{}", grid.serialize());

    grid.save("/tmp/report.tsv")?;
    println!("\nSaved {} rows to /tmp/report.tsv", grid.row_count());

    Ok(())
}
