//! JSONL export functionality.
//!
//! Each line is a JSON object keyed by the source headers, in header order,
//! plus `Domain`, `Tld` and `Detected Categories` (an array). This format is
//! ideal for piping to `jq` or loading into other tools.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::io::Write;

use crate::config::{DETECTED_CATEGORIES_COLUMN, DOMAIN_COLUMN, TLD_COLUMN};
use crate::dataset::Record;

/// Exports records to JSONL (JSON Lines).
///
/// A source column that shares its name with a derived column is shadowed
/// by the derived value.
///
/// # Returns
///
/// Returns the number of records exported, or an error if writing fails.
pub fn export_jsonl<W: Write>(
    mut writer: W,
    headers: &[String],
    records: &[&Record],
) -> Result<usize> {
    let mut record_count = 0;

    for record in records {
        let mut object = Map::new();
        for (header, field) in headers.iter().zip(record.fields()) {
            object.insert(header.clone(), Value::String(field.clone()));
        }
        object.insert(
            DOMAIN_COLUMN.to_string(),
            Value::String(record.domain().to_string()),
        );
        object.insert(TLD_COLUMN.to_string(), Value::String(record.tld().to_string()));
        object.insert(
            DETECTED_CATEGORIES_COLUMN.to_string(),
            Value::Array(
                record
                    .categories()
                    .iter()
                    .map(|c| Value::String(c.to_string()))
                    .collect(),
            ),
        );

        let line = serde_json::to_string(&Value::Object(object))
            .context("Failed to serialize record")?;
        writeln!(writer, "{line}").context("Failed to write JSONL line")?;
        record_count += 1;
    }

    writer.flush().context("Failed to flush JSONL output")?;
    Ok(record_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::CategoryTable;

    #[test]
    fn test_export_jsonl_objects() {
        let table = CategoryTable::from_entries(vec![("Law", vec!["law"])]).unwrap();
        let records = [Record::from_text("mylawblog.net", &table)];
        let refs: Vec<&Record> = records.iter().collect();

        let mut buf = Vec::new();
        let count = export_jsonl(&mut buf, &["URL".to_string()], &refs).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "{\"URL\":\"mylawblog.net\",\"Domain\":\"mylawblog.net\",\"Tld\":\".net\",\"Detected Categories\":[\"Law\"]}\n"
        );
    }

    #[test]
    fn test_export_jsonl_lines_parse() {
        let table = CategoryTable::builtin();
        let records = [
            Record::from_text("a.com", &table),
            Record::from_text("b.org", &table),
        ];
        let refs: Vec<&Record> = records.iter().collect();

        let mut buf = Vec::new();
        export_jsonl(&mut buf, &["URL".to_string()], &refs).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let parsed: Vec<Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1]["Tld"], ".org");
    }
}
