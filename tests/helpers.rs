// Shared test helpers for writing input tables and keyword files.

use std::path::PathBuf;
use tempfile::TempDir;

/// A small backlink export with traffic and country columns.
#[allow(dead_code)] // Used by other test files
pub const SAMPLE_CSV: &str = "\
URL,Organic Traffic,Country,Category
shop.example.com,120,US,Retail
mylawblog.net,10,UK,Legal
https://trip-shop.co.uk/deals,\"1,500\",UK,
plain.org,n/a,DE,
";

/// Writes `content` to `name` inside `dir` and returns the path.
#[allow(dead_code)] // Used by other test files
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Keyword table matching `SAMPLE_CSV` rows to small synthetic categories.
#[allow(dead_code)] // Used by other test files
pub fn write_keyword_table(dir: &TempDir) -> PathBuf {
    write_file(
        dir,
        "categories.json",
        r#"{"E-commerce": ["shop"], "Law": ["law"], "Travel": ["trip"]}"#,
    )
}
