//! Application initialization.
//!
//! This module provides functions to initialize shared resources before a run:
//! - Logger (plain or JSON)
//! - Category keyword table (built-in or from a JSON file)

mod logger;

use std::path::Path;

use log::info;

use crate::classify::CategoryTable;
use crate::error_handling::CategoryTableError;

// Re-export public API
pub use logger::init_logger_with;

/// Loads the category table from `path`, or returns the built-in table.
///
/// # Errors
///
/// Returns a `CategoryTableError` if the file cannot be read or is invalid.
pub fn init_category_table(path: Option<&Path>) -> Result<CategoryTable, CategoryTableError> {
    let table = match path {
        Some(path) => CategoryTable::from_path(path)?,
        None => CategoryTable::builtin(),
    };
    info!("Using {} categories", table.len());
    Ok(table)
}
