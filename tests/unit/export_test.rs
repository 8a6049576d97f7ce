//! Tests for CSV and JSON export

use std::fs;

use chrono::{TimeZone, Utc};
use lbtas::adapters::ExportFormat;
use lbtas::adapters::export::{export, write_csv, write_json};
use lbtas::core::models::Snapshot;
use tempfile::TempDir;

use crate::common::{default_store, store_with};

#[test]
fn test_csv_one_row_per_rating() {
    let store = store_with(&[
        ("Acme", &[("reliability", 3), ("reliability", 4), ("support", -1)]),
        ("Globex", &[("usability", 2)]),
    ]);
    let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let mut buffer = Vec::new();
    let rows = write_csv(&store, &mut buffer, stamp).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert_eq!(rows, 4);
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        [
            "exchange,category,rating,exported_at",
            "Acme,reliability,3,2024-05-01T12:00:00Z",
            "Acme,reliability,4,2024-05-01T12:00:00Z",
            "Acme,support,-1,2024-05-01T12:00:00Z",
            "Globex,usability,2,2024-05-01T12:00:00Z",
        ]
    );
}

#[test]
fn test_csv_empty_store_has_header_only() {
    let store = default_store();
    let mut buffer = Vec::new();
    assert_eq!(write_csv(&store, &mut buffer, Utc::now()).unwrap(), 0);
    assert_eq!(String::from_utf8(buffer).unwrap(), "exchange,category,rating,exported_at\n");
}

#[test]
fn test_csv_quotes_awkward_names() {
    let store = store_with(&[("Acme, Inc.", &[("support", 1)])]);
    let mut buffer = Vec::new();
    write_csv(&store, &mut buffer, Utc::now()).unwrap();
    assert!(String::from_utf8(buffer).unwrap().contains("\"Acme, Inc.\",support,1,"));
}

#[test]
fn test_json_matches_snapshot() {
    let store = store_with(&[("Acme", &[("reliability", 3)]), ("Globex", &[])]);

    let mut buffer = Vec::new();
    assert_eq!(write_json(&store, &mut buffer).unwrap(), 2);

    let exported: Snapshot = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(exported, store.snapshot());
}

#[test]
fn test_export_to_file() {
    let temp = TempDir::new().unwrap();
    let store = store_with(&[("Acme", &[("reliability", 3), ("support", 2)])]);

    let csv_path = temp.path().join("ratings.csv");
    assert_eq!(export(&store, ExportFormat::Csv, &csv_path).unwrap(), 2);
    assert_eq!(fs::read_to_string(&csv_path).unwrap().lines().count(), 3);

    let json_path = temp.path().join("ratings.json");
    assert_eq!(export(&store, ExportFormat::Json, &json_path).unwrap(), 1);
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["Acme"]["reliability"], serde_json::json!([3]));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let store = default_store();
    let path = temp.path().join("no-such-dir").join("out.csv");
    assert!(export(&store, ExportFormat::Csv, &path).is_err());
}

#[test]
fn test_export_format_parse() {
    assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert!("xml".parse::<ExportFormat>().unwrap_err().contains("xml"));
    assert_eq!(ExportFormat::Csv.to_string(), "csv");
}
