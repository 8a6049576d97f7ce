//! Bulk export of a rating store
//!
//! - CSV: one row per individual rating, stamped with the export time
//! - JSON: the full snapshot, identical to the persisted file format

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::core::RatingStore;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Flattened rows: exchange, category, rating, export time
    Csv,
    /// Full snapshot
    Json,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {s}. Use 'csv' or 'json'")),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    exchange: &'a str,
    category: &'a str,
    rating: i8,
    exported_at: &'a str,
}

/// Export `store` to `path`.
///
/// Returns the number of rows (CSV) or exchange records (JSON) written.
pub fn export(store: &RatingStore, format: ExportFormat, path: &Path) -> anyhow::Result<usize> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let written = match format {
        ExportFormat::Csv => write_csv(store, &mut writer, Utc::now())?,
        ExportFormat::Json => write_json(store, &mut writer)?,
    };
    writer.flush().with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("Exported {written} {format} record(s) to {}", path.display());
    Ok(written)
}

/// Write one CSV row per rating. Returns the number of data rows.
pub fn write_csv<W: Write>(
    store: &RatingStore,
    writer: W,
    exported_at: DateTime<Utc>,
) -> anyhow::Result<usize> {
    let stamp = exported_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(["exchange", "category", "rating", "exported_at"])?;

    let mut rows = 0;
    for (exchange, record) in store.exchanges() {
        for category in store.criteria().iter() {
            for rating in record.ratings(category) {
                csv.serialize(ExportRow {
                    exchange,
                    category,
                    rating: rating.value(),
                    exported_at: &stamp,
                })?;
                rows += 1;
            }
        }
    }

    csv.flush()?;
    Ok(rows)
}

/// Write the full snapshot as pretty JSON. Returns the number of exchanges.
pub fn write_json<W: Write>(store: &RatingStore, writer: W) -> anyhow::Result<usize> {
    let snapshot = store.snapshot();
    serde_json::to_writer_pretty(writer, &snapshot).context("failed to serialize snapshot")?;
    Ok(snapshot.exchanges.len())
}
