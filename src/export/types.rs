//! Export types.

use clap::ValueEnum;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (source columns plus derived columns, for Excel/Sheets)
    Csv,
    /// JSONL format (one object per row, categories as an array)
    Jsonl,
}
