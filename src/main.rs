//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `backlink_filter` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use backlink_filter::config::DEFAULT_SUMMARY_TOP;
use backlink_filter::export::ExportFormat;
use backlink_filter::initialization::init_logger_with;
use backlink_filter::{run_filter, Axis, Config, LogFormat, LogLevel};

/// Tags a backlink table with keyword categories and domain suffixes, then
/// filters, summarizes and exports it.
#[derive(Debug, Parser)]
#[command(name = "backlink_filter", version)]
struct Cli {
    /// CSV/TSV file to read (`-` for stdin)
    #[arg(value_parser)]
    file: PathBuf,

    /// Column holding the URL or title text (default: first column)
    #[arg(long)]
    text_column: Option<String>,

    /// Column holding traffic (default: `Traffic` or `Organic Traffic`)
    #[arg(long)]
    traffic_column: Option<String>,

    /// Column holding the country (default: `Country`)
    #[arg(long)]
    country_column: Option<String>,

    /// Field delimiter: a single ASCII character, or `tab`
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,

    /// JSON keyword table (`{"Category": ["keyword", ...]}`) replacing the built-in one
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Keep rows detected as this category (repeatable; none = all)
    #[arg(long = "category", value_name = "NAME")]
    category: Vec<String>,

    /// Keep rows with this suffix, e.g. `.com` (repeatable; none = all)
    #[arg(long = "tld", value_name = "SUFFIX")]
    tld: Vec<String>,

    /// Keep rows from this country (repeatable; none = all)
    #[arg(long = "country", value_name = "NAME")]
    country: Vec<String>,

    /// Minimum traffic, inclusive
    #[arg(long)]
    min_traffic: Option<f64>,

    /// Maximum traffic, inclusive
    #[arg(long)]
    max_traffic: Option<f64>,

    /// Exclude every row on this axis (repeatable)
    #[arg(long, value_enum, value_name = "AXIS")]
    select_none: Vec<Axis>,

    /// Export format: csv|jsonl
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Export file (default: stdout)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Entries shown per summary table
    #[arg(long, default_value_t = DEFAULT_SUMMARY_TOP)]
    top: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            file: cli.file,
            log_level: cli.log_level,
            log_format: cli.log_format,
            text_column: cli.text_column,
            traffic_column: cli.traffic_column,
            country_column: cli.country_column,
            delimiter: cli.delimiter,
            categories_file: cli.categories,
            categories: cli.category,
            tlds: cli.tld,
            countries: cli.country,
            min_traffic: cli.min_traffic,
            max_traffic: cli.max_traffic,
            select_none: cli.select_none,
            format: cli.format,
            output: cli.output,
            top: cli.top,
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
        },
    }
}

fn main() -> Result<()> {
    let config: Config = Cli::parse().into();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_filter(config) {
        Ok(report) => {
            // stdout may carry the exported rows, so the summary goes to stderr
            eprintln!(
                "✅ Kept {} of {} row{} in {:.2}s",
                report.retained_rows,
                report.total_rows,
                if report.total_rows == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            if let Some(output) = &report.output {
                eprintln!("Results saved in {}", output.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("backlink_filter error: {:#}", e);
            process::exit(1);
        }
    }
}
