//! Configuration constants.
//!
//! Column-name candidates, labels for derived columns and summary defaults.

/// Label assigned when no category keyword matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Scheme prefixed to bare hosts (e.g. `example.com`) before URL parsing.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

// Input column detection
/// Header names (case-insensitive, trimmed) recognised as the traffic column.
/// The first header matching any candidate wins.
pub const TRAFFIC_COLUMN_CANDIDATES: &[&str] = &["Traffic", "Organic Traffic"];
/// Header names recognised as the country column.
pub const COUNTRY_COLUMN_CANDIDATES: &[&str] = &["Country"];

// Derived output columns, appended after the source columns on export
pub const DOMAIN_COLUMN: &str = "Domain";
pub const TLD_COLUMN: &str = "Tld";
pub const DETECTED_CATEGORIES_COLUMN: &str = "Detected Categories";

/// Separator used when rendering a category set into a single cell.
pub const CATEGORY_SEPARATOR: &str = ", ";

// Summary output
/// Default number of entries printed per summary table.
pub const DEFAULT_SUMMARY_TOP: usize = 10;
/// Key used in summaries for records whose key is empty (e.g. no TLD).
pub const EMPTY_KEY_LABEL: &str = "(none)";
