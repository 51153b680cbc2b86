//! Load statistics tracking.
//!
//! Counts row-level warnings raised while a dataset is read and enriched.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::WarningType;

/// Per-run warning counters.
///
/// All warning types are initialized to zero on creation, so lookups never
/// miss. Loading is single-threaded, so plain counters suffice.
#[derive(Debug, Clone)]
pub struct LoadStats {
    warnings: HashMap<WarningType, usize>,
}

impl LoadStats {
    pub fn new() -> Self {
        let mut warnings = HashMap::new();
        for warning in WarningType::iter() {
            warnings.insert(warning, 0);
        }
        LoadStats { warnings }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&mut self, warning: WarningType) {
        if let Some(counter) = self.warnings.get_mut(&warning) {
            *counter += 1;
        }
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(&warning).copied().unwrap_or(0)
    }

    pub fn total_warnings(&self) -> usize {
        self.warnings.values().sum()
    }

    /// Non-zero counters in declaration order.
    pub fn nonzero(&self) -> Vec<(WarningType, usize)> {
        WarningType::iter()
            .map(|w| (w, self.get_warning_count(w)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
