//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (column names, labels, summary defaults)
//! - Logging and axis option types
//! - The library `Config` consumed by `run_filter`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Axis, Config, LogFormat, LogLevel};
