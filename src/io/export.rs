//! CSV export for production plans.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::plan::types::{ProductionPlan, round_to};

/// Column header for CSV plan export.
const HEADER: [&str; 2] = ["name", "p"];

/// Exports a production plan to a CSV file at the given path.
///
/// Writes a header row followed by one row per allocation in plan order.
/// Produces deterministic output for identical inputs.
///
/// # Arguments
///
/// * `plan` - Production plan to export
/// * `decimals` - Decimal places kept in the `p` column
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(plan: &ProductionPlan, decimals: u32, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(plan, decimals, buf)
}

/// Writes a production plan as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(plan: &ProductionPlan, decimals: u32, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    let precision = decimals as usize;

    wtr.write_record(HEADER)?;
    for a in plan {
        let p = format!("{:.precision$}", round_to(a.p, decimals));
        wtr.write_record([a.name.as_str(), p.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
