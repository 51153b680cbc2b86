//! Error type definitions.
//!
//! This module defines the error and warning types used throughout the application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for loading the input table.
///
/// Any of these aborts the load; no partially read dataset is returned.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input could not be opened or read.
    #[error("Failed to read input '{path}': {source}")]
    Io {
        /// Input path as given
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed delimited text (e.g. ragged rows, bad UTF-8).
    #[error("Malformed tabular input: {0}")]
    Csv(#[from] csv::Error),

    /// The input has no header row.
    #[error("Input is empty: expected a header row")]
    EmptyInput,

    /// A column named explicitly in the configuration is absent from the header.
    #[error("Column '{name}' not found (available: {available})")]
    UnknownColumn {
        /// Requested column name
        name: String,
        /// Comma-separated header names
        available: String,
    },
}

/// Error types for loading a category keyword table.
#[derive(Error, Debug)]
pub enum CategoryTableError {
    /// The table file could not be read.
    #[error("Failed to read category table: {0}")]
    Io(#[from] std::io::Error),

    /// The table file is not a JSON object of string arrays.
    #[error("Failed to parse category table JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A category has a blank name.
    #[error("Category names must not be empty")]
    EmptyName,

    /// Two categories share a name.
    #[error("Duplicate category '{0}'")]
    DuplicateName(String),

    /// A category has no usable keywords.
    #[error("Category '{0}' has no keywords")]
    EmptyKeywords(String),

    /// The fallback label cannot be configured as a real category.
    #[error("'{0}' is reserved for rows without a keyword match")]
    ReservedName(String),
}

/// Types of row-level data issues found while loading.
///
/// Warnings never abort a load; the affected field falls back to a neutral
/// value and the occurrence is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// Traffic cell present but not numeric; treated as 0
    UnparseableTraffic,
    /// Traffic cell empty; treated as 0
    MissingTraffic,
    /// Text cell yields no domain
    EmptyDomain,
    /// Domain has no dot, so no suffix could be derived
    MissingTld,
}

impl WarningType {
    /// Human-readable label for summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::UnparseableTraffic => "unparseable traffic value",
            WarningType::MissingTraffic => "missing traffic value",
            WarningType::EmptyDomain => "no domain in text column",
            WarningType::MissingTld => "domain without suffix",
        }
    }
}
