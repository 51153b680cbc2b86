//! Export functionality for filtered records.
//!
//! This module writes the filtered rows, with their derived columns, as CSV or
//! JSONL to a file or stdout.

mod csv;
mod jsonl;
mod output;
mod types;

use anyhow::Result;
use std::path::Path;

use crate::dataset::Record;

pub use self::csv::export_csv;
pub use jsonl::export_jsonl;
pub use types::ExportFormat;

/// Exports records in `format` to `output`, or to stdout when `None`.
///
/// Returns the number of records written.
pub fn export_records(
    format: ExportFormat,
    output: Option<&Path>,
    headers: &[String],
    records: &[&Record],
) -> Result<usize> {
    let writer = output::open_output(output)?;
    match format {
        ExportFormat::Csv => export_csv(writer, headers, records),
        ExportFormat::Jsonl => export_jsonl(writer, headers, records),
    }
}
