//! Traffic cell parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Compiles a constant pattern, panicking with the pattern on failure.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Integers grouped in thousands, e.g. `12,345`, `1 200 000` or `9_999.5`.
static GROUPED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"^[+-]?\d{1,3}(?:[,_ ]\d{3})+(?:\.\d+)?$",
        "GROUPED_NUMBER",
    )
});

/// Outcome of parsing one traffic cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TrafficCell {
    Value(f64),
    Missing,
    Invalid,
}

/// Parses a traffic cell, accepting thousands separators.
pub(crate) fn parse_traffic(raw: &str) -> TrafficCell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return TrafficCell::Missing;
    }

    let candidate = if GROUPED_NUMBER.is_match(trimmed) {
        trimmed.replace([',', '_', ' '], "")
    } else {
        trimmed.to_string()
    };

    match candidate.parse::<f64>() {
        Ok(value) if value.is_finite() => TrafficCell::Value(value),
        _ => TrafficCell::Invalid,
    }
}
