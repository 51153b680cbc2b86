//! CSV export functionality.
//!
//! Writes the source columns unchanged, followed by the derived `Domain`,
//! `Tld` and `Detected Categories` columns.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;

use crate::config::{DETECTED_CATEGORIES_COLUMN, DOMAIN_COLUMN, TLD_COLUMN};
use crate::dataset::Record;

/// Exports records to CSV.
///
/// # Arguments
///
/// * `writer` - Destination
/// * `headers` - Source header row
/// * `records` - Records to write, in output order
///
/// # Returns
///
/// Returns the number of records exported, or an error if writing fails.
pub fn export_csv<W: Write>(writer: W, headers: &[String], records: &[&Record]) -> Result<usize> {
    let mut writer = Writer::from_writer(writer);

    let header_row = headers
        .iter()
        .map(String::as_str)
        .chain([DOMAIN_COLUMN, TLD_COLUMN, DETECTED_CATEGORIES_COLUMN]);
    writer
        .write_record(header_row)
        .context("Failed to write CSV header")?;

    let mut record_count = 0;
    for record in records {
        let categories = record.categories().to_string();
        let row = record
            .fields()
            .iter()
            .map(String::as_str)
            .chain([record.domain(), record.tld(), categories.as_str()]);
        writer.write_record(row).context("Failed to write CSV row")?;
        record_count += 1;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(record_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::CategoryTable;

    #[test]
    fn test_export_csv_appends_derived_columns() {
        let table =
            CategoryTable::from_entries(vec![("E-commerce", vec!["shop"]), ("Law", vec!["law"])])
                .unwrap();
        let records = [
            Record::from_text("shop.example.com", &table),
            Record::from_text("law-shop.net", &table),
        ];
        let refs: Vec<&Record> = records.iter().collect();

        let mut buf = Vec::new();
        let count = export_csv(&mut buf, &["URL".to_string()], &refs).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "URL,Domain,Tld,Detected Categories");
        assert_eq!(lines[1], "shop.example.com,shop.example.com,.com,E-commerce");
        assert_eq!(
            lines[2],
            "law-shop.net,law-shop.net,.net,\"E-commerce, Law\""
        );
    }

    #[test]
    fn test_export_csv_header_only_when_empty() {
        let mut buf = Vec::new();
        let count = export_csv(&mut buf, &["URL".to_string(), "Traffic".to_string()], &[]).unwrap();
        assert_eq!(count, 0);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "URL,Traffic,Domain,Tld,Detected Categories\n"
        );
    }
}
