//! Exchange record model
//!
//! An exchange is the rated subject. Its record keeps one ordered sequence
//! of ratings per category plus lifecycle metadata.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::{Criteria, Rating};

/// Lifecycle metadata for an exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// When the exchange was created; never changes afterwards
    pub created: DateTime<Utc>,
    /// Ratings accepted over the lifetime of the exchange
    pub total_ratings: u64,
}

/// Ratings for one exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRecord {
    ratings: BTreeMap<String, Vec<Rating>>,
    metadata: Metadata,
    /// Snapshot fields this store does not understand, written back as-is
    extra: Map<String, Value>,
}

impl ExchangeRecord {
    /// Create an empty record with a sequence for every category
    #[must_use]
    pub fn new(criteria: &Criteria, created: DateTime<Utc>) -> Self {
        Self {
            ratings: criteria.iter().map(|c| (c.to_string(), Vec::new())).collect(),
            metadata: Metadata {
                created,
                total_ratings: 0,
            },
            extra: Map::new(),
        }
    }

    /// Rebuild a record from stored parts
    #[must_use]
    pub const fn from_parts(
        ratings: BTreeMap<String, Vec<Rating>>,
        metadata: Metadata,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            ratings,
            metadata,
            extra,
        }
    }

    /// Ratings recorded under `criterion`, oldest first
    #[must_use]
    pub fn ratings(&self, criterion: &str) -> &[Rating] {
        self.ratings.get(criterion).map_or(&[], Vec::as_slice)
    }

    /// All rating sequences keyed by category
    #[must_use]
    pub const fn categories(&self) -> &BTreeMap<String, Vec<Rating>> {
        &self.ratings
    }

    /// Lifecycle metadata
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Unrecognised snapshot fields carried along with this record
    #[must_use]
    pub const fn extra_fields(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Number of ratings currently held across all categories
    #[must_use]
    pub fn rating_count(&self) -> usize {
        self.ratings.values().map(Vec::len).sum()
    }

    /// Append a rating and bump the counter together.
    ///
    /// The counter saturates at `u64::MAX`; a loaded snapshot may carry any value.
    pub(crate) fn push(&mut self, criterion: &str, rating: Rating) {
        self.ratings.entry(criterion.to_string()).or_default().push(rating);
        self.metadata.total_ratings = self.metadata.total_ratings.saturating_add(1);
    }

    /// Add empty sequences for categories this record is missing.
    /// Returns the names that were added.
    pub(crate) fn backfill(&mut self, criteria: &Criteria) -> Vec<String> {
        let mut added = Vec::new();
        for category in criteria.iter() {
            if !self.ratings.contains_key(category) {
                self.ratings.insert(category.to_string(), Vec::new());
                added.push(category.to_string());
            }
        }
        added
    }
}
