//! Averaging and ranking
//!
//! Pure functions over exchange records. Rounding to two decimals happens
//! only on output values; rankings are ordered on unrounded averages.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::core::models::{
    CategoryAverage, Criteria, ExchangePerformance, ExchangeRecord, Rating, Report, Summary,
    round2,
};

/// How many exchanges appear in each of the top and bottom lists
pub const RANKING_SIZE: usize = 5;

/// Arithmetic mean, or `None` for an empty sequence
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(r.value())).sum();
    Some(sum as f64 / ratings.len() as f64)
}

#[allow(clippy::cast_precision_loss)]
fn mean_f64(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Per-category averages for one exchange
#[must_use]
pub fn summarize(name: &str, record: &ExchangeRecord, criteria: &Criteria) -> Summary {
    let ratings = criteria
        .iter()
        .map(|category| CategoryAverage {
            category: category.to_string(),
            average: mean(record.ratings(category)).map(round2),
        })
        .collect();

    Summary {
        exchange: name.to_string(),
        ratings,
    }
}

/// Build the store-wide report
#[must_use]
pub fn build_report(
    criteria: &Criteria,
    exchanges: &BTreeMap<String, ExchangeRecord>,
    generated_at: DateTime<Utc>,
) -> Report {
    let mut all: Vec<Rating> = Vec::new();
    let mut by_category: Vec<(&str, Vec<Rating>)> =
        criteria.iter().map(|c| (c, Vec::new())).collect();
    let mut ranking: Vec<ExchangePerformance> = Vec::new();

    for (name, record) in exchanges {
        let mut category_means = Vec::new();
        for (category, bucket) in &mut by_category {
            let ratings = record.ratings(*category);
            if let Some(avg) = mean(ratings) {
                category_means.push(avg);
            }
            bucket.extend_from_slice(ratings);
            all.extend_from_slice(ratings);
        }

        if let Some(average) = mean_f64(&category_means) {
            ranking.push(ExchangePerformance {
                name: name.clone(),
                average,
            });
        }
    }

    // Stable: equal averages keep their order in the ranking list
    ranking.sort_by(|a, b| b.average.total_cmp(&a.average));

    let top_performers = ranking.iter().take(RANKING_SIZE).map(rounded).collect();
    let bottom_start = ranking.len().saturating_sub(RANKING_SIZE);
    let bottom_performers = ranking[bottom_start..].iter().map(rounded).collect();

    Report {
        total_exchanges: exchanges.len(),
        total_ratings: all.len(),
        system_average: mean(&all).map(round2),
        category_averages: by_category
            .into_iter()
            .map(|(category, ratings)| CategoryAverage {
                category: category.to_string(),
                average: mean(&ratings).map(round2),
            })
            .collect(),
        top_performers,
        bottom_performers,
        generated_at,
    }
}

fn rounded(performance: &ExchangePerformance) -> ExchangePerformance {
    ExchangePerformance {
        name: performance.name.clone(),
        average: round2(performance.average),
    }
}
