//! Tabular input and per-row enrichment.
//!
//! A `Dataset` holds the header row, the resolved column layout and one
//! `Record` per data row. Records keep their source fields verbatim and carry
//! the derived domain, suffix, detected categories, traffic and country
//! alongside them.

mod loader;
mod traffic;

use log::debug;

use crate::classify::{CategoryTable, DetectedCategories};
use crate::domain::{extract_domain, extract_tld};
use crate::error_handling::{LoadStats, WarningType};

use traffic::{parse_traffic, TrafficCell};

pub use loader::{load_path, load_reader, LoadOptions};

/// Column indexes the core reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// URL or title text used for domain and category derivation
    pub text: usize,
    /// Numeric traffic, if present
    pub traffic: Option<usize>,
    /// Country, if present
    pub country: Option<usize>,
}

/// One input row plus its derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<String>,
    domain: String,
    tld: String,
    categories: DetectedCategories,
    traffic: f64,
    country: Option<String>,
}

impl Record {
    /// Derives a record from raw fields according to `layout`.
    ///
    /// Data issues never fail: missing or malformed traffic becomes 0 and is
    /// counted in `stats`.
    pub(crate) fn enrich(
        fields: Vec<String>,
        layout: &ColumnLayout,
        table: &CategoryTable,
        stats: &mut LoadStats,
    ) -> Self {
        let text = fields.get(layout.text).map(String::as_str).unwrap_or("");
        let domain = extract_domain(text);
        let tld = extract_tld(&domain);
        if domain.is_empty() {
            stats.increment_warning(WarningType::EmptyDomain);
        } else if tld.is_empty() {
            stats.increment_warning(WarningType::MissingTld);
        }
        let categories = table.detect(text);

        let traffic = match layout.traffic.and_then(|i| fields.get(i)) {
            Some(raw) => match parse_traffic(raw) {
                TrafficCell::Value(v) => v,
                TrafficCell::Missing => {
                    stats.increment_warning(WarningType::MissingTraffic);
                    0.0
                }
                TrafficCell::Invalid => {
                    debug!("Unparseable traffic value '{raw}' for '{text}', using 0");
                    stats.increment_warning(WarningType::UnparseableTraffic);
                    0.0
                }
            },
            None => 0.0,
        };

        let country = layout
            .country
            .map(|i| fields.get(i).map(|c| c.trim().to_string()).unwrap_or_default());

        Record {
            fields,
            domain,
            tld,
            categories,
            traffic,
            country,
        }
    }

    /// Builds a single-field record from URL or title text.
    ///
    /// Traffic defaults to 0 and there is no country field.
    pub fn from_text(text: &str, table: &CategoryTable) -> Self {
        let layout = ColumnLayout {
            text: 0,
            traffic: None,
            country: None,
        };
        Self::enrich(vec![text.to_string()], &layout, table, &mut LoadStats::new())
    }

    pub fn with_traffic(mut self, traffic: f64) -> Self {
        self.traffic = traffic;
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.trim().to_string());
        self
    }

    /// Source fields in header order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn tld(&self) -> &str {
        &self.tld
    }

    pub fn categories(&self) -> &DetectedCategories {
        &self.categories
    }

    pub fn traffic(&self) -> f64 {
        self.traffic
    }

    /// `None` when the dataset has no country column.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

/// A loaded and enriched table.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    layout: ColumnLayout,
    records: Vec<Record>,
}

impl Dataset {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_country(&self) -> bool {
        self.layout.country.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CategoryTable {
        CategoryTable::from_entries(vec![("E-commerce", vec!["shop"]), ("Law", vec!["law"])])
            .unwrap()
    }

    fn layout() -> ColumnLayout {
        ColumnLayout {
            text: 0,
            traffic: Some(1),
            country: Some(2),
        }
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_enrich_derives_fields() {
        let mut stats = LoadStats::new();
        let record = Record::enrich(
            row(&["https://shop.example.com/x", "1,200", " US "]),
            &layout(),
            &table(),
            &mut stats,
        );
        assert_eq!(record.domain(), "shop.example.com");
        assert_eq!(record.tld(), ".com");
        assert!(record.categories().contains("E-commerce"));
        assert_eq!(record.traffic(), 1200.0);
        assert_eq!(record.country(), Some("US"));
        assert_eq!(stats.total_warnings(), 0);
    }

    #[test]
    fn test_enrich_keeps_source_fields_verbatim() {
        let cells = row(&["  shop.example.com ", "12,345", " US "]);
        let record = Record::enrich(cells.clone(), &layout(), &table(), &mut LoadStats::new());
        assert_eq!(record.fields(), cells.as_slice());
    }

    #[test]
    fn test_enrich_counts_traffic_issues() {
        let mut stats = LoadStats::new();
        let bad = Record::enrich(row(&["a.com", "lots", "DE"]), &layout(), &table(), &mut stats);
        let empty = Record::enrich(row(&["b.com", "", "DE"]), &layout(), &table(), &mut stats);
        assert_eq!(bad.traffic(), 0.0);
        assert_eq!(empty.traffic(), 0.0);
        assert_eq!(stats.get_warning_count(WarningType::UnparseableTraffic), 1);
        assert_eq!(stats.get_warning_count(WarningType::MissingTraffic), 1);
    }

    #[test]
    fn test_enrich_counts_domain_issues() {
        let mut stats = LoadStats::new();
        let no_domain = Record::enrich(row(&["", "1", ""]), &layout(), &table(), &mut stats);
        let no_tld = Record::enrich(row(&["localhost", "1", ""]), &layout(), &table(), &mut stats);
        assert_eq!(no_domain.domain(), "");
        assert_eq!(no_tld.tld(), "");
        assert_eq!(stats.get_warning_count(WarningType::EmptyDomain), 1);
        assert_eq!(stats.get_warning_count(WarningType::MissingTld), 1);
        assert!(no_domain.categories().is_uncategorized());
    }

    #[test]
    fn test_from_text_defaults() {
        let record = Record::from_text("mylawblog.net", &table());
        assert_eq!(record.traffic(), 0.0);
        assert_eq!(record.country(), None);
        assert_eq!(record.tld(), ".net");
        assert!(record.categories().contains("Law"));

        let record = record.with_traffic(10.0).with_country("FR");
        assert_eq!(record.traffic(), 10.0);
        assert_eq!(record.country(), Some("FR"));
    }
}
