//! Summary and warning statistics printing.

use log::{info, warn};

use crate::error_handling::LoadStats;
use crate::summary::Summary;

/// Logs a summary table, limited to the first `top` entries.
pub fn print_summary(title: &str, summary: &Summary, top: usize) {
    if summary.is_empty() {
        info!("{title}: no rows");
        return;
    }

    let shown = summary.top(top);
    if shown.len() < summary.len() {
        info!(
            "{} (top {} of {}):",
            title,
            shown.len(),
            summary.len()
        );
    } else {
        info!("{title}:");
    }
    for entry in shown {
        info!("   {}: {}", entry.key, entry.count);
    }
}

/// Logs row-level warnings raised while loading.
pub fn print_load_statistics(stats: &LoadStats) {
    let total_warnings = stats.total_warnings();
    if total_warnings == 0 {
        return;
    }

    warn!("Warning Counts ({} total):", total_warnings);
    for (warning_type, count) in stats.nonzero() {
        warn!("   {}: {}", warning_type.as_str(), count);
    }
}
