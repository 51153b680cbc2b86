//! Frequency summaries over filtered records.
//!
//! Counts are ordered by descending count. Equal counts keep the order in
//! which their keys were first seen, the same result a stable sort over an
//! insertion-ordered tally gives.

use std::collections::HashMap;

use crate::config::EMPTY_KEY_LABEL;
use crate::dataset::Record;
use crate::filter::fold_country;

/// One summary bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub key: String,
    pub count: usize,
}

/// Ordered key counts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    entries: Vec<SummaryEntry>,
}

impl Summary {
    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    /// At most `n` leading entries.
    pub fn top(&self, n: usize) -> &[SummaryEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts the keys produced by `keys` for each record.
///
/// A record may yield several keys (and contribute to several buckets) or
/// none. Empty keys are counted under `(none)`.
pub fn summarize<'a, I, F, K, S>(records: I, keys: F) -> Summary
where
    I: IntoIterator<Item = &'a Record>,
    F: FnMut(&'a Record) -> K,
    K: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tally(records, keys, str::to_string)
}

/// Buckets keys that are equal after `fold`; each bucket is labelled with the
/// first spelling seen.
fn tally<'a, I, F, K, S, G>(records: I, mut keys: F, fold: G) -> Summary
where
    I: IntoIterator<Item = &'a Record>,
    F: FnMut(&'a Record) -> K,
    K: IntoIterator<Item = S>,
    S: AsRef<str>,
    G: Fn(&str) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<SummaryEntry> = Vec::new();

    for record in records {
        for key in keys(record) {
            let key = match key.as_ref() {
                "" => EMPTY_KEY_LABEL,
                k => k,
            };
            let folded = fold(key);
            match index.get(&folded) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(folded, entries.len());
                    entries.push(SummaryEntry {
                        key: key.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable: ties stay in first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    Summary { entries }
}

/// Records per TLD.
pub fn tld_counts<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Record>,
{
    summarize(records, |r| std::iter::once(r.tld()))
}

/// Records per detected category; multi-category records count once per category.
pub fn category_counts<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Record>,
{
    summarize(records, |r| r.categories().iter())
}

/// Records per country, skipping records without a country field.
///
/// Countries are grouped case-insensitively, matching the filter; `UK` and
/// `uk` share one bucket labelled with whichever came first.
pub fn country_counts<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Record>,
{
    tally(records, |r| r.country(), fold_country)
}
