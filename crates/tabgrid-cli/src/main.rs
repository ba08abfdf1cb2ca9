//! tabgrid CLI - build tab-separated tables from the command line

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tabgrid::prelude::*;
use tabgrid::{parse_column_label, LineTerminator, Quoting};

#[derive(Parser)]
#[command(name = "tabgrid")]
#[command(author, version, about = "Build tab-separated tables and resolve column labels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 1-based column index of each label (A=1, Z=26, AA=27)
    #[command(alias = "col")]
    ColumnIndex {
        /// Column labels
        #[arg(required = true)]
        labels: Vec<String>,

        /// Reject labels containing anything but A-Z
        #[arg(long)]
        strict: bool,
    },

    /// Build a table from columns, each given as HEADER=V1,V2,...
    Columns {
        /// Columns, one argument each
        #[arg(required = true)]
        columns: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a two-column table from LABEL=VALUE pairs
    Labels {
        /// Label/value pairs
        #[arg(required = true)]
        pairs: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Quote fields containing tabs, quotes or newlines (RFC 4180)
    #[arg(short, long)]
    quote: bool,

    /// Use CRLF line endings
    #[arg(long)]
    crlf: bool,
}

impl OutputArgs {
    fn write_options(&self) -> TsvWriteOptions {
        TsvWriteOptions {
            quoting: if self.quote {
                Quoting::Rfc4180
            } else {
                Quoting::Never
            },
            line_terminator: if self.crlf {
                LineTerminator::CRLF
            } else {
                LineTerminator::LF
            },
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ColumnIndex { labels, strict } => column_indices(&labels, strict),
        Commands::Columns { columns, output } => {
            let grid = build_columns(&columns)?;
            emit(&grid, &output)
        }
        Commands::Labels { pairs, output } => {
            let grid = build_labels(&pairs)?;
            emit(&grid, &output)
        }
    }
}

fn column_indices(labels: &[String], strict: bool) -> Result<()> {
    for label in labels {
        let index = if strict {
            parse_column_label(label).with_context(|| format!("Bad label '{}'", label))?
        } else {
            column_index(label)
        };
        println!("{}\t{}", label, index);
    }
    Ok(())
}

fn build_columns(columns: &[String]) -> Result<Grid> {
    let mut grid = Grid::new();
    let mut col = MINIMUM;

    for column in columns {
        let (header, values) = split_pair(column)?;
        let values = if values.is_empty() {
            Vec::new()
        } else {
            values.split(',').map(parse_value).collect()
        };
        col = grid.set_header_and_values(header, values, col)?;
    }

    Ok(grid)
}

fn build_labels(pairs: &[String]) -> Result<Grid> {
    let mut grid = Grid::new();
    let mut row = MINIMUM;

    for pair in pairs {
        let (label, value) = split_pair(pair)?;
        row = grid.set_label_and_value(label, parse_value(value), row)?;
    }

    Ok(grid)
}

fn emit(grid: &Grid, args: &OutputArgs) -> Result<()> {
    let options = args.write_options();

    if let Some(path) = &args.output {
        TsvWriter::write_file(grid, path, &options)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        eprintln!("Wrote {} rows to '{}'", grid.row_count(), path.display());
    } else {
        let text = grid.to_tsv(&options).context("Failed to render table")?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text).context("Failed to write to stdout")?;
    }

    Ok(())
}

fn split_pair(arg: &str) -> Result<(&str, &str)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Expected NAME=VALUE, got '{}'", arg),
    }
}

/// Infer a cell value from command-line text
fn parse_value(text: &str) -> CellValue {
    if let Ok(n) = text.parse::<i64>() {
        return CellValue::Integer(n);
    }
    if is_plain_decimal(text) {
        if let Ok(n) = text.parse::<f64>() {
            return CellValue::Float(n);
        }
    }
    match text {
        "true" => CellValue::Boolean(true),
        "false" => CellValue::Boolean(false),
        _ => CellValue::text(text),
    }
}

/// Optional sign, digits and at most one `.`; no exponent, `inf` or `nan`
fn is_plain_decimal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1
}
