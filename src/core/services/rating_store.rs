//! The rating store
//!
//! Owns every exchange record, validates and applies ratings, computes
//! summaries and reports, and keeps an optional [`SnapshotStore`] in step
//! with memory. Every successful mutation is saved straight away; a failed
//! save is logged and recorded as a [`StoreWarning`] but never undoes or
//! fails the mutation.

use std::collections::BTreeMap;

use chrono::Utc;
use log::{debug, info, warn};

use super::aggregate;
use crate::core::error::{RatingError, StoreWarning};
use crate::core::models::{Criteria, ExchangeRecord, Rating, Report, Snapshot, Summary};
use crate::core::ports::SnapshotStore;

/// Ratings for every known exchange
#[derive(Debug)]
pub struct RatingStore {
    criteria: Criteria,
    exchanges: BTreeMap<String, ExchangeRecord>,
    target: Option<Box<dyn SnapshotStore>>,
    warnings: Vec<StoreWarning>,
}

impl RatingStore {
    /// A store that lives only in memory
    #[must_use]
    pub const fn in_memory(criteria: Criteria) -> Self {
        Self {
            criteria,
            exchanges: BTreeMap::new(),
            target: None,
            warnings: Vec::new(),
        }
    }

    /// A store backed by `target`, loaded from it immediately.
    ///
    /// A missing snapshot gives an empty store. An unreadable one is
    /// recorded as a load warning and also gives an empty store.
    pub fn open(criteria: Criteria, target: Box<dyn SnapshotStore>) -> Self {
        let mut store = Self {
            criteria,
            exchanges: BTreeMap::new(),
            target: Some(target),
            warnings: Vec::new(),
        };
        // a load failure is already logged and kept in `warnings`
        let _ = store.reload();
        store
    }

    /// The configured categories
    #[must_use]
    pub const fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Add a new exchange with no ratings
    pub fn create_exchange(&mut self, name: &str) -> Result<(), RatingError> {
        if name.trim().is_empty() {
            return Err(RatingError::EmptyExchangeName);
        }
        if self.exchanges.contains_key(name) {
            return Err(RatingError::DuplicateExchange(name.to_string()));
        }

        self.exchanges.insert(name.to_string(), ExchangeRecord::new(&self.criteria, Utc::now()));
        info!("Created exchange '{name}'");
        self.autosave();
        Ok(())
    }

    /// Append one rating to an exchange
    pub fn record_rating(
        &mut self,
        exchange: &str,
        criterion: &str,
        value: i64,
    ) -> Result<(), RatingError> {
        let rating = self.validate(exchange, criterion, value)?;
        let record = self
            .exchanges
            .get_mut(exchange)
            .ok_or_else(|| RatingError::UnknownExchange(exchange.to_string()))?;

        record.push(criterion, rating);
        debug!("Recorded {rating} for {criterion} on '{exchange}'");
        self.autosave();
        Ok(())
    }

    /// Validate a whole batch, then record each entry in order.
    ///
    /// Nothing is applied unless every entry is valid. Returns the number
    /// of ratings recorded.
    pub fn record_ratings<S>(
        &mut self,
        exchange: &str,
        entries: &[(S, i64)],
    ) -> Result<usize, RatingError>
    where
        S: AsRef<str>,
    {
        for (criterion, value) in entries {
            self.validate(exchange, criterion.as_ref(), *value)?;
        }
        for (criterion, value) in entries {
            self.record_rating(exchange, criterion.as_ref(), *value)?;
        }
        Ok(entries.len())
    }

    fn validate(&self, exchange: &str, criterion: &str, value: i64) -> Result<Rating, RatingError> {
        if !self.exchanges.contains_key(exchange) {
            return Err(RatingError::UnknownExchange(exchange.to_string()));
        }
        if !self.criteria.contains(criterion) {
            return Err(RatingError::UnknownCriterion {
                criterion: criterion.to_string(),
                configured: self.criteria.as_slice().to_vec(),
            });
        }
        Rating::new(value)
    }

    /// Rounded per-category averages for one exchange
    pub fn summarize(&self, exchange: &str) -> Result<Summary, RatingError> {
        let record = self
            .exchanges
            .get(exchange)
            .ok_or_else(|| RatingError::UnknownExchange(exchange.to_string()))?;
        Ok(aggregate::summarize(exchange, record, &self.criteria))
    }

    /// Names of all exchanges (currently in lexicographic order)
    #[must_use]
    pub fn list_exchanges(&self) -> Vec<&str> {
        self.exchanges.keys().map(String::as_str).collect()
    }

    /// Whether an exchange exists
    #[must_use]
    pub fn contains(&self, exchange: &str) -> bool {
        self.exchanges.contains_key(exchange)
    }

    /// Look up an exchange record
    #[must_use]
    pub fn exchange(&self, name: &str) -> Option<&ExchangeRecord> {
        self.exchanges.get(name)
    }

    /// Iterate over all exchanges
    pub fn exchanges(&self) -> impl Iterator<Item = (&str, &ExchangeRecord)> {
        self.exchanges.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of exchanges
    #[must_use]
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    /// Whether the store has no exchanges
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Aggregate statistics for the whole store
    #[must_use]
    pub fn generate_report(&self) -> Report {
        aggregate::build_report(&self.criteria, &self.exchanges, Utc::now())
    }

    /// Current state in wire form
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_records(&self.criteria, self.exchanges())
    }

    /// Warnings recorded since the store was opened, oldest first
    #[must_use]
    pub fn warnings(&self) -> &[StoreWarning] {
        &self.warnings
    }

    /// Save the full store to the persistence target, if any.
    ///
    /// On failure the previous snapshot is left in place and memory stays
    /// authoritative.
    pub fn persist(&mut self) -> Result<(), StoreWarning> {
        let Some(target) = &self.target else {
            return Ok(());
        };

        let result = target.save(&self.snapshot()).map_err(|err| StoreWarning::Persistence {
            location: target.location(),
            reason: format!("{err:#}"),
        });

        match result {
            Ok(()) => {
                debug!("Saved {} exchange(s) to {}", self.exchanges.len(), target.location());
                Ok(())
            },
            Err(warning) => {
                warn!("{warning}");
                self.warnings.push(warning.clone());
                Err(warning)
            },
        }
    }

    /// Replace memory with the persisted snapshot.
    ///
    /// No snapshot yet leaves memory as it is. Malformed data empties the
    /// store and is returned (and recorded) as a load warning; the target is
    /// asked to keep a copy of the unreadable snapshot first.
    pub fn reload(&mut self) -> Result<(), StoreWarning> {
        let Some(target) = &self.target else {
            return Ok(());
        };
        let location = target.location();

        let loaded = target.load().and_then(|snapshot| {
            snapshot
                .map(|s| s.into_records(&self.criteria, Utc::now()))
                .transpose()
                .map_err(anyhow::Error::from)
        });

        match loaded {
            Ok(Some(exchanges)) => {
                info!("Loaded {} exchange(s) from {location}", exchanges.len());
                self.exchanges = exchanges;
                Ok(())
            },
            Ok(None) => {
                debug!("No snapshot at {location}, starting fresh");
                Ok(())
            },
            Err(err) => {
                let warning = StoreWarning::Load {
                    location,
                    reason: format!("{err:#}"),
                };
                warn!("{warning}");
                match target.back_up() {
                    Ok(Some(backup)) => warn!("Kept a copy of the unreadable snapshot at {backup}"),
                    Ok(None) => {},
                    Err(err) => warn!("Could not back up the unreadable snapshot: {err:#}"),
                }
                self.exchanges.clear();
                self.warnings.push(warning.clone());
                Err(warning)
            },
        }
    }

    fn autosave(&mut self) {
        // failures are logged and kept in `warnings` by `persist`
        let _ = self.persist();
    }
}
