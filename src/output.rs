// src/output.rs

use anyhow::{Context, Result};
use std::io::Write;

use crate::parse::Row;

/// How rows are rendered on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Cells joined with `,` as-is. A cell containing a comma makes the line ambiguous.
    #[default]
    Plain,
    /// RFC 4180 style: cells with commas, quotes or newlines get quoted.
    Csv,
}

/// Write one line per row, no header. Returns the number of rows written.
pub fn write_rows<W: Write>(out: &mut W, rows: &[Row], format: OutputFormat) -> Result<usize> {
    match format {
        OutputFormat::Plain => {
            for row in rows {
                writeln!(out, "{}", row.joined()).context("writing row")?;
            }
        }
        OutputFormat::Csv => {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut *out);
            for row in rows {
                wtr.write_record(row.cells()).context("writing CSV record")?;
            }
            wtr.flush().context("flushing CSV writer")?;
        }
    }
    out.flush().context("flushing output")?;
    Ok(rows.len())
}
