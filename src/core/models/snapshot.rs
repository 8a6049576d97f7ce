//! Persisted snapshot format
//!
//! On disk a store is a JSON object keyed by exchange name. Each exchange is
//! an object with one integer array per category and a `_metadata` object:
//!
//! ```json
//! {
//!   "Acme": {
//!     "reliability": [3, 4],
//!     "usability": [],
//!     "_metadata": { "created": "2024-05-01T12:00:00+00:00", "total_ratings": 2 }
//!   }
//! }
//! ```
//!
//! Loading is lenient: missing categories and metadata are synthesized, and
//! fields this store does not know about are kept and written back.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::{Criteria, ExchangeRecord, Metadata, Rating};

/// Key holding exchange metadata inside a snapshot record
pub const METADATA_KEY: &str = "_metadata";

/// Errors found while turning a snapshot into records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// A configured category holds something other than valid ratings
    #[error("exchange '{exchange}': category '{category}' {reason}")]
    MalformedCategory {
        /// Exchange the bad field belongs to
        exchange: String,
        /// Category field that could not be read
        category: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Whole-store snapshot, keyed by exchange name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    /// Exchange records
    pub exchanges: BTreeMap<String, SnapshotRecord>,
}

/// One exchange as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Category arrays and any other fields, in written order
    #[serde(flatten)]
    pub fields: Map<String, Value>,

    /// Lifecycle metadata, absent in snapshots written by older tools
    #[serde(rename = "_metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SnapshotMetadata>,
}

/// Stored metadata; every field is optional on load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Creation time (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Ratings accepted so far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_ratings: Option<u64>,
}

impl Snapshot {
    /// Capture records in wire form, categories in `criteria` order
    #[must_use]
    pub fn from_records<'a, I>(criteria: &Criteria, records: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a ExchangeRecord)>,
    {
        let exchanges = records
            .into_iter()
            .map(|(name, record)| (name.to_string(), SnapshotRecord::from_record(record, criteria)))
            .collect();
        Self { exchanges }
    }

    /// Reconcile every record against `criteria`
    pub fn into_records(
        self,
        criteria: &Criteria,
        now: DateTime<Utc>,
    ) -> Result<BTreeMap<String, ExchangeRecord>, SnapshotError> {
        self.exchanges
            .into_iter()
            .map(|(name, record)| {
                let record = record.into_record(&name, criteria, now)?;
                Ok((name, record))
            })
            .collect()
    }
}

impl SnapshotRecord {
    /// Wire form of a single record.
    ///
    /// Categories come first in configured order, followed by carried-over
    /// fields in the order they were read.
    #[must_use]
    pub fn from_record(record: &ExchangeRecord, criteria: &Criteria) -> Self {
        let mut fields = Map::new();
        for category in criteria.iter() {
            let values = record.ratings(category).iter().map(|r| Value::from(r.value())).collect();
            fields.insert(category.to_string(), Value::Array(values));
        }
        for (field, value) in record.extra_fields() {
            if !fields.contains_key(field) {
                fields.insert(field.clone(), value.clone());
            }
        }

        let metadata = record.metadata();
        Self {
            fields,
            metadata: Some(SnapshotMetadata {
                created: Some(metadata.created.to_rfc3339()),
                total_ratings: Some(metadata.total_ratings),
            }),
        }
    }

    /// Build a record, backfilling categories and synthesizing metadata.
    ///
    /// Configured categories must be arrays of valid ratings. Everything
    /// else is carried through untouched.
    pub fn into_record(
        self,
        exchange: &str,
        criteria: &Criteria,
        now: DateTime<Utc>,
    ) -> Result<ExchangeRecord, SnapshotError> {
        let mut ratings = BTreeMap::new();
        let mut extra = Map::new();

        for (field, value) in self.fields {
            if criteria.contains(&field) {
                let parsed = parse_ratings(value).map_err(|reason| {
                    SnapshotError::MalformedCategory {
                        exchange: exchange.to_string(),
                        category: field.clone(),
                        reason,
                    }
                })?;
                ratings.insert(field, parsed);
            } else {
                extra.insert(field, value);
            }
        }

        let found: usize = ratings.values().map(Vec::len).sum();
        let stored = self.metadata.unwrap_or_default();
        if stored.created.is_none() || stored.total_ratings.is_none() {
            log::debug!("Synthesizing metadata for exchange '{exchange}'");
        }

        let created = stored
            .created
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map_or(now, |t| t.with_timezone(&Utc));
        let total_ratings = stored.total_ratings.unwrap_or(found as u64);

        let mut record = ExchangeRecord::from_parts(
            ratings,
            Metadata {
                created,
                total_ratings,
            },
            extra,
        );
        let added = record.backfill(criteria);
        if !added.is_empty() {
            log::debug!("Backfilled categories {added:?} for exchange '{exchange}'");
        }
        Ok(record)
    }
}

fn parse_ratings(value: Value) -> Result<Vec<Rating>, String> {
    let Value::Array(items) = value else {
        return Err(format!("is not an array: {value}"));
    };

    items
        .into_iter()
        .map(|item| {
            item.as_i64()
                .ok_or_else(|| format!("contains a non-integer value: {item}"))
                .and_then(|v| Rating::new(v).map_err(|e| e.to_string()))
        })
        .collect()
}
