//! backlink_filter library: keyword categorization and filtering of backlink tables
//!
//! This library tags each row of a website/backlink table with the categories
//! whose keywords occur in its URL or title, derives the row's domain and
//! top-level suffix, filters rows by category, suffix, country and traffic,
//! and summarizes and exports the result.
//!
//! # Example
//!
//! ```no_run
//! use backlink_filter::{run_filter, Config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     file: std::path::PathBuf::from("backlinks.csv"),
//!     categories: vec!["Law".to_string()],
//!     min_traffic: Some(50.0),
//!     ..Default::default()
//! };
//!
//! let report = run_filter(config)?;
//! println!("Kept {} of {} rows", report.retained_rows, report.total_rows);
//! # Ok(())
//! # }
//! ```
//!
//! The building blocks are usable on their own:
//!
//! ```
//! use backlink_filter::classify::CategoryTable;
//! use backlink_filter::dataset::Record;
//! use backlink_filter::filter::{apply_filters, FilterCriteria, TrafficRange};
//!
//! let table = CategoryTable::from_entries(vec![
//!     ("E-commerce", vec!["shop"]),
//!     ("Law", vec!["law"]),
//! ])
//! .unwrap();
//! let records = vec![
//!     Record::from_text("shop.example.com", &table).with_traffic(120.0),
//!     Record::from_text("mylawblog.net", &table).with_traffic(10.0),
//! ];
//! let criteria = FilterCriteria {
//!     traffic: TrafficRange::new(Some(50.0), Some(500.0)),
//!     ..Default::default()
//! };
//!
//! let kept = apply_filters(&records, &criteria);
//! assert_eq!(kept.len(), 1);
//! assert!(kept[0].categories().contains("E-commerce"));
//! ```

mod app;
pub mod classify;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod filter;
pub mod initialization;
pub mod summary;

// Re-export public API
pub use classify::{detect_categories, CategoryTable, DetectedCategories};
pub use config::{Axis, Config, LogFormat, LogLevel};
pub use dataset::{Dataset, Record};
pub use domain::{extract_domain, extract_tld};
pub use filter::{apply_filters, FilterCriteria, Selection, TrafficRange};
pub use run::{run_filter, FilterReport};
pub use summary::{summarize, Summary};

// Internal run module (load, filter, summarize, export)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info, warn};
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::app::{print_load_statistics, print_summary};
    use crate::config::{Config, UNCATEGORIZED};
    use crate::dataset::{load_path, LoadOptions};
    use crate::error_handling::LoadStats;
    use crate::export::export_records;
    use crate::filter::{apply_filters, Selection};
    use crate::initialization::init_category_table;
    use crate::summary::{category_counts, country_counts, tld_counts, Summary};

    /// Results of a filtering run.
    #[derive(Debug, Clone)]
    pub struct FilterReport {
        /// Rows read from the input
        pub total_rows: usize,
        /// Rows passing the filter
        pub retained_rows: usize,
        /// Rows written to the export destination
        pub exported_rows: usize,
        /// Retained rows per TLD
        pub tld_counts: Summary,
        /// Retained rows per detected category
        pub category_counts: Summary,
        /// Retained rows per country (`None` without a country column)
        pub country_counts: Option<Summary>,
        /// Row-level warnings raised while loading
        pub warnings: LoadStats,
        /// Export destination (`None` for stdout)
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one load, filter, summarize and export pass.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The category table file cannot be read or is invalid
    /// - The input cannot be read or is malformed
    /// - The export destination cannot be written
    pub fn run_filter(config: Config) -> Result<FilterReport> {
        let start = Instant::now();

        let table = init_category_table(config.categories_file.as_deref())
            .context("Failed to load category table")?;

        let (dataset, warnings) = load_path(&config.file, &LoadOptions::from(&config), &table)
            .with_context(|| format!("Failed to load {}", config.file.display()))?;
        print_load_statistics(&warnings);

        let criteria = config.criteria();
        debug!("Filter criteria: {criteria:?}");
        if criteria.traffic.min > criteria.traffic.max {
            warn!(
                "Traffic range is empty (min {} > max {}); no rows will match",
                criteria.traffic.min, criteria.traffic.max
            );
        }
        if !dataset.has_country() && !criteria.countries.is_any() {
            warn!("Input has no country column; country filter ignored");
        }
        if let Selection::Only(selected) = &criteria.categories {
            for name in selected {
                let known = name == UNCATEGORIZED
                    || table.categories().iter().any(|c| c.name() == name);
                if !known {
                    warn!("Category '{name}' is not in the category table");
                }
            }
        }

        let filtered = apply_filters(dataset.records(), &criteria);
        info!(
            "Retained {} of {} rows",
            filtered.len(),
            dataset.len()
        );

        let tlds = tld_counts(filtered.iter().copied());
        let categories = category_counts(filtered.iter().copied());
        let countries = dataset
            .has_country()
            .then(|| country_counts(filtered.iter().copied()));

        print_summary("TLD counts", &tlds, config.top);
        print_summary("Category counts", &categories, config.top);
        if let Some(countries) = &countries {
            print_summary("Country counts", countries, config.top);
        }

        let exported_rows = export_records(
            config.format,
            config.output.as_deref(),
            dataset.headers(),
            &filtered,
        )
        .context("Failed to export filtered rows")?;

        Ok(FilterReport {
            total_rows: dataset.len(),
            retained_rows: filtered.len(),
            exported_rows,
            tld_counts: tlds,
            category_counts: categories,
            country_counts: countries,
            warnings,
            output: config.output,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
