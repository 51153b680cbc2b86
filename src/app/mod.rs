//! Reporting helpers used by the run pipeline.

pub mod statistics;

// Re-export public API
pub use statistics::{print_load_statistics, print_summary};
