//! Delimited-text loading.
//!
//! The whole input is read and validated before a `Dataset` is returned, so a
//! malformed file never yields partially processed rows.

use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};

use crate::classify::CategoryTable;
use crate::config::{Config, COUNTRY_COLUMN_CANDIDATES, TRAFFIC_COLUMN_CANDIDATES};
use crate::error_handling::{LoadError, LoadStats};

use super::{ColumnLayout, Dataset, Record};

/// Column and delimiter overrides for loading.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Text column name (first column when `None`)
    pub text_column: Option<String>,
    /// Traffic column name (auto-detected when `None`)
    pub traffic_column: Option<String>,
    /// Country column name (auto-detected when `None`)
    pub country_column: Option<String>,
    /// Field delimiter (inferred from the path when `None`)
    pub delimiter: Option<u8>,
}

impl From<&Config> for LoadOptions {
    fn from(config: &Config) -> Self {
        LoadOptions {
            text_column: config.text_column.clone(),
            traffic_column: config.traffic_column.clone(),
            country_column: config.country_column.clone(),
            delimiter: config.delimiter,
        }
    }
}

/// Loads a dataset from a file path, or from stdin when the path is `-`.
///
/// `.tsv` and `.tab` files default to tab-delimited; everything else to comma.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened, and any error from
/// `load_reader`.
pub fn load_path(
    path: &Path,
    opts: &LoadOptions,
    table: &CategoryTable,
) -> Result<(Dataset, LoadStats), LoadError> {
    let delimiter = opts.delimiter.unwrap_or_else(|| infer_delimiter(path));

    if path.as_os_str() == "-" {
        info!("Reading rows from stdin");
        return load_reader(io::stdin().lock(), delimiter, opts, table);
    }

    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let (dataset, stats) = load_reader(file, delimiter, opts, table)?;
    info!(
        "Loaded {} rows ({} columns) from {}",
        dataset.len(),
        dataset.headers().len(),
        path.display()
    );
    Ok((dataset, stats))
}

/// Loads a dataset from any reader. The first row is the header.
///
/// # Errors
///
/// - `LoadError::EmptyInput` if there is no header row
/// - `LoadError::UnknownColumn` if an explicitly named column is absent
/// - `LoadError::Csv` on malformed rows (unequal field counts, invalid UTF-8)
pub fn load_reader<R: Read>(
    reader: R,
    delimiter: u8,
    opts: &LoadOptions,
    table: &CategoryTable,
) -> Result<(Dataset, LoadStats), LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(LoadError::EmptyInput);
    }

    let layout = resolve_layout(&headers, opts)?;
    debug!("Resolved column layout: {layout:?}");

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        rows.push(row.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let mut stats = LoadStats::new();
    let records = rows
        .into_iter()
        .map(|fields| Record::enrich(fields, &layout, table, &mut stats))
        .collect();

    Ok((
        Dataset {
            headers,
            layout,
            records,
        },
        stats,
    ))
}

fn infer_delimiter(path: &Path) -> u8 {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    }
}

fn resolve_layout(headers: &[String], opts: &LoadOptions) -> Result<ColumnLayout, LoadError> {
    let text = match opts.text_column.as_deref() {
        Some(name) => require_column(headers, name)?,
        None => 0,
    };
    let traffic = match opts.traffic_column.as_deref() {
        Some(name) => Some(require_column(headers, name)?),
        None => find_column(headers, TRAFFIC_COLUMN_CANDIDATES),
    };
    let country = match opts.country_column.as_deref() {
        Some(name) => Some(require_column(headers, name)?),
        None => find_column(headers, COUNTRY_COLUMN_CANDIDATES),
    };
    Ok(ColumnLayout {
        text,
        traffic,
        country,
    })
}

fn header_matches(header: &str, name: &str) -> bool {
    header.trim().eq_ignore_ascii_case(name.trim())
}

/// First header matching any of `candidates`.
fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| candidates.iter().any(|c| header_matches(h, c)))
}

fn require_column(headers: &[String], name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| header_matches(h, name))
        .ok_or_else(|| LoadError::UnknownColumn {
            name: name.to_string(),
            available: headers.join(", "),
        })
}
