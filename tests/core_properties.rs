//! Behavioral properties of the classification, extraction, filtering and
//! summary core, exercised through the public API.

use backlink_filter::classify::CategoryTable;
use backlink_filter::dataset::{load_reader, LoadOptions, Record};
use backlink_filter::export::export_csv;
use backlink_filter::filter::{apply_filters, FilterCriteria, Selection, TrafficRange};
use backlink_filter::summary::{category_counts, tld_counts};
use backlink_filter::{extract_domain, extract_tld};

fn synthetic_table() -> CategoryTable {
    CategoryTable::from_entries(vec![
        ("E-commerce", vec!["shop", "store"]),
        ("Law", vec!["law"]),
        ("Automotive", vec!["car"]),
    ])
    .unwrap()
}

#[test]
fn test_text_without_keywords_is_uncategorized() {
    let table = synthetic_table();
    for text in ["", "example.org", "https://news.example.com/a/b", "ÜBER-BLOG.de"] {
        let detected = table.detect(text);
        assert_eq!(
            detected.as_slice(),
            &["Uncategorized".to_string()],
            "text: {text}"
        );
    }
}

#[test]
fn test_keyword_hits_are_case_insensitive_substrings() {
    let table = synthetic_table();
    for (text, category) in [
        ("MyLawBlog.net", "Law"),
        ("https://www.STOREFRONT.io", "E-commerce"),
        ("scarves-and-more.com", "Automotive"),
    ] {
        assert!(
            table.detect(text).contains(category),
            "'{text}' should contain {category}"
        );
    }
}

#[test]
fn test_tld_is_last_dot_segment() {
    assert_eq!(extract_tld("https://example.co.uk/page"), ".uk");
    assert_eq!(extract_tld("example.com"), ".com");
    assert_eq!(extract_tld(&extract_domain("example.com")), ".com");
}

#[test]
fn test_scenario_traffic_filter_with_synthetic_table() {
    let table = CategoryTable::from_entries(vec![
        ("E-commerce", vec!["shop"]),
        ("Law", vec!["law"]),
    ])
    .unwrap();
    let input = "url,traffic\nshop.example.com,120\nmylawblog.net,10\n";
    let (dataset, _) = load_reader(input.as_bytes(), b',', &LoadOptions::default(), &table).unwrap();

    let criteria = FilterCriteria {
        traffic: TrafficRange::new(Some(50.0), Some(500.0)),
        ..Default::default()
    };
    let kept = apply_filters(dataset.records(), &criteria);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].fields()[0], "shop.example.com");
    assert_eq!(kept[0].categories().as_slice(), &["E-commerce".to_string()]);
}

#[test]
fn test_filter_then_summarize_then_export() {
    let table = synthetic_table();
    let records = vec![
        Record::from_text("car-store.com", &table).with_traffic(300.0),
        Record::from_text("lawfirm.com", &table).with_traffic(80.0),
        Record::from_text("shop.net", &table).with_traffic(90.0),
        Record::from_text("quiet.org", &table).with_traffic(1000.0),
    ];
    let criteria = FilterCriteria {
        categories: Selection::from_values(["E-commerce", "Law"]),
        tlds: Selection::from_values([".com", ".net"]),
        traffic: TrafficRange::new(Some(80.0), None),
        ..Default::default()
    };

    let kept = apply_filters(&records, &criteria);
    assert_eq!(kept.len(), 3);
    assert_eq!(apply_filters(kept.iter().copied(), &criteria), kept);

    let tlds = tld_counts(kept.iter().copied());
    assert_eq!(tlds.entries()[0].key, ".com");
    assert_eq!(tlds.entries()[0].count, 2);

    let categories = category_counts(kept.iter().copied());
    assert_eq!(categories.get("E-commerce"), Some(2));
    assert_eq!(categories.get("Automotive"), Some(1));
    assert_eq!(categories.get("Law"), Some(1));

    let mut buf = Vec::new();
    let written = export_csv(&mut buf, &["URL".to_string()], &kept).unwrap();
    assert_eq!(written, 3);
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("car-store.com,car-store.com,.com,\"E-commerce, Automotive\""));
}
