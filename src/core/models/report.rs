//! Aggregated views: per-exchange summaries and the system report

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Round to two decimal places, the precision every reported average uses
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average for one category; `None` means no ratings were recorded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAverage {
    /// Category name
    pub category: String,
    /// Mean rounded to two decimals
    pub average: Option<f64>,
}

/// Per-category averages for a single exchange
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Exchange name
    pub exchange: String,
    /// One entry per configured category, in configured order
    pub ratings: Vec<CategoryAverage>,
}

impl Summary {
    /// Average for `category`, if it exists and has data
    #[must_use]
    pub fn average(&self, category: &str) -> Option<f64> {
        self.ratings.iter().find(|r| r.category == category).and_then(|r| r.average)
    }

    /// Mean of the categories that have data, rounded to two decimals
    #[must_use]
    pub fn overall(&self) -> Option<f64> {
        let values: Vec<f64> = self.ratings.iter().filter_map(|r| r.average).collect();
        if values.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(round2(mean))
    }
}

/// An exchange's place in the ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangePerformance {
    /// Exchange name
    pub name: String,
    /// Mean of the exchange's category averages, rounded to two decimals
    pub average: f64,
}

/// Point-in-time aggregate over the whole store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Number of exchanges
    pub total_exchanges: usize,
    /// Number of individual ratings currently held
    pub total_ratings: usize,
    /// Mean of every rating in the store
    pub system_average: Option<f64>,
    /// Mean per category across all exchanges
    pub category_averages: Vec<CategoryAverage>,
    /// Up to five best exchanges, best first
    pub top_performers: Vec<ExchangePerformance>,
    /// Up to five worst exchanges, in the same descending order
    pub bottom_performers: Vec<ExchangePerformance>,
    /// When the report was computed
    pub generated_at: DateTime<Utc>,
}
