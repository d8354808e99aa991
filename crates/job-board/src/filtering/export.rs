use std::io::Write;

use super::error::ExportError;

/// Flat, column-oriented rendering of a record for tables and CSV.
pub trait TableRow {
    const COLUMNS: &'static [&'static str];

    /// One cell per entry of [`COLUMNS`](Self::COLUMNS), in the same order.
    fn cells(&self) -> Vec<String>;
}

/// Joins list attributes into a single cell.
pub fn join_cell(values: &[&str]) -> String {
    values.join("; ")
}

/// Write `rows` as CSV: a header row followed by one row per record.
pub fn export_csv<W, R>(writer: W, rows: &[&R]) -> Result<(), ExportError>
where
    W: Write,
    R: TableRow,
{
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(R::COLUMNS)?;
    for row in rows {
        csv.write_record(row.cells())?;
    }
    csv.flush()?;
    Ok(())
}
