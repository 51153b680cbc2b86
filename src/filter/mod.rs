//! Record filtering.
//!
//! `FilterCriteria` is an immutable value built by the caller for each pass;
//! the core keeps no selection state between calls. Every axis is a
//! `Selection`: `Any` places no restriction, `Only(set)` keeps rows whose
//! value is in the set. An empty user selection maps to `Any`, while
//! `Selection::none()` is the explicit way to exclude every row on an axis.

use std::collections::BTreeSet;

use crate::dataset::Record;
use crate::domain::normalize_tld;

/// Case- and whitespace-insensitive form of a country value.
pub(crate) fn fold_country(country: &str) -> String {
    country.trim().to_lowercase()
}

/// Allowed values on one filter axis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No restriction on this axis
    #[default]
    Any,
    /// Only these values pass; an empty set passes nothing
    Only(BTreeSet<String>),
}

impl Selection {
    /// Builds a selection from user-chosen values.
    ///
    /// Blank values are ignored and an empty result means "no restriction".
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|v| !v.trim().is_empty())
            .collect();
        if set.is_empty() {
            Selection::Any
        } else {
            Selection::Only(set)
        }
    }

    /// Explicit "select none": nothing passes on this axis.
    pub fn none() -> Self {
        Selection::Only(BTreeSet::new())
    }

    /// Rewrites each selected value, e.g. to normalize case.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        match self {
            Selection::Any => Selection::Any,
            Selection::Only(set) => Selection::Only(set.into_iter().map(f).collect()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    pub fn allows(&self, value: &str) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(set) => set.contains(value),
        }
    }

    /// Like `allows`, but compares values after passing both sides through `fold`.
    pub fn allows_folded<F>(&self, value: &str, fold: F) -> bool
    where
        F: Fn(&str) -> String,
    {
        match self {
            Selection::Any => true,
            Selection::Only(set) => {
                let value = fold(value);
                set.iter().any(|v| fold(v) == value)
            }
        }
    }

    /// True if any of `values` is allowed.
    pub fn allows_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Selection::Any => true,
            Selection::Only(set) => values.into_iter().any(|v| set.contains(v)),
        }
    }
}

/// Inclusive traffic bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficRange {
    pub min: f64,
    pub max: f64,
}

impl TrafficRange {
    /// Missing bounds are unbounded. `min > max` is accepted and matches nothing.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        TrafficRange {
            min: min.unwrap_or(f64::NEG_INFINITY),
            max: max.unwrap_or(f64::INFINITY),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    pub fn contains(&self, traffic: f64) -> bool {
        self.min <= traffic && traffic <= self.max
    }
}

impl Default for TrafficRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// The constraints applied in one filtering pass.
///
/// TLD values are normalized like `normalize_tld` before comparison, so `COM`
/// and `.com` select the same rows. Countries compare trimmed and
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub categories: Selection,
    pub tlds: Selection,
    pub countries: Selection,
    pub traffic: TrafficRange,
}

impl FilterCriteria {
    /// Whether `record` satisfies every axis.
    pub fn matches(&self, record: &Record) -> bool {
        if !self.tlds.allows_folded(record.tld(), normalize_tld) {
            return false;
        }
        if !self.traffic.contains(record.traffic()) {
            return false;
        }
        // The country axis only applies when the input has a country column
        if let Some(country) = record.country() {
            if !self.countries.allows_folded(country, fold_country) {
                return false;
            }
        }
        self.categories.allows_any(record.categories().iter())
    }
}

/// Returns the records satisfying `criteria`, in input order.
///
/// Pure and idempotent: filtering the output again with the same criteria
/// yields the same records.
pub fn apply_filters<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
