//! Error handling and load statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, input loading and category tables
//! - Row-level warning statistics
//!
//! Errors abort a run; warnings only record that a field fell back to a
//! neutral value.

mod stats;
mod types;

// Re-export public API
pub use stats::LoadStats;
pub use types::{CategoryTableError, InitializationError, LoadError, WarningType};
