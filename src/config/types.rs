//! Configuration types.
//!
//! This module defines the enums and the library `Config` struct. The CLI in
//! `main.rs` converts its parsed arguments into a `Config`.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::DEFAULT_SUMMARY_TOP;
use crate::export::ExportFormat;
use crate::filter::{FilterCriteria, Selection, TrafficRange};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A filter axis that can be explicitly set to "select none".
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Axis {
    /// Detected categories
    Category,
    /// Top-level suffix
    Tld,
    /// Country column
    Country,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use backlink_filter::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("backlinks.csv"),
///     tlds: vec![".com".to_string()],
///     min_traffic: Some(50.0),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file (`-` for stdin)
    pub file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Column holding the URL or title text (defaults to the first column)
    pub text_column: Option<String>,

    /// Column holding numeric traffic (auto-detected when `None`)
    pub traffic_column: Option<String>,

    /// Column holding the country (auto-detected when `None`)
    pub country_column: Option<String>,

    /// Field delimiter (inferred from the file extension when `None`)
    pub delimiter: Option<u8>,

    /// JSON keyword table replacing the built-in one
    pub categories_file: Option<PathBuf>,

    /// Selected categories; empty means no restriction
    pub categories: Vec<String>,

    /// Selected TLDs; empty means no restriction
    pub tlds: Vec<String>,

    /// Selected countries; empty means no restriction
    pub countries: Vec<String>,

    /// Inclusive lower traffic bound (unbounded when `None`)
    pub min_traffic: Option<f64>,

    /// Inclusive upper traffic bound (unbounded when `None`)
    pub max_traffic: Option<f64>,

    /// Axes explicitly set to exclude every row
    pub select_none: Vec<Axis>,

    /// Export format
    pub format: ExportFormat,

    /// Export destination (stdout when `None`)
    pub output: Option<PathBuf>,

    /// Entries shown per summary table
    pub top: usize,
}

impl Config {
    /// Builds the filter criteria described by this configuration.
    ///
    /// An explicit `select_none` entry wins over any values listed for the
    /// same axis.
    pub fn criteria(&self) -> FilterCriteria {
        let axis = |which: Axis, values: &[String]| {
            if self.select_none.contains(&which) {
                Selection::none()
            } else {
                Selection::from_values(values.iter().cloned())
            }
        };

        FilterCriteria {
            categories: axis(Axis::Category, &self.categories),
            tlds: axis(Axis::Tld, &self.tlds).map(|t| crate::domain::normalize_tld(&t)),
            countries: axis(Axis::Country, &self.countries)
                .map(|c| crate::filter::fold_country(&c)),
            traffic: TrafficRange::new(self.min_traffic, self.max_traffic),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("backlinks.csv"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            text_column: None,
            traffic_column: None,
            country_column: None,
            delimiter: None,
            categories_file: None,
            categories: Vec::new(),
            tlds: Vec::new(),
            countries: Vec::new(),
            min_traffic: None,
            max_traffic: None,
            select_none: Vec::new(),
            format: ExportFormat::Csv,
            output: None,
            top: DEFAULT_SUMMARY_TOP,
        }
    }
}
