//! Rating commands - record ratings directly or interactively

use std::io;

use lbtas::Rating;
use lbtas::core::{RatingError, RatingStore};
use lbtas::output::{OperationResult, OutputMode, RatingResult};
use lbtas::prompt::Prompter;

use super::ensure_exchange;

/// Prompt for every category, then record the answers as one batch
pub fn rate(store: &mut RatingStore, exchange: &str, mode: OutputMode) -> anyhow::Result<()> {
    ensure_exchange(store, exchange)?;

    let answers = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        prompter.collect(exchange, store.criteria())?
    };

    let batch: Vec<(String, i64)> =
        answers.into_iter().map(|(criterion, rating)| (criterion, i64::from(rating))).collect();
    let recorded = store.record_ratings(exchange, &batch)?;

    OperationResult {
        success: true,
        message: format!("\nRating completed for '{exchange}' ({recorded} rating(s) recorded)."),
    }
    .render(mode);
    Ok(())
}

/// Record a single rating given on the command line.
///
/// The rating and criterion are checked before a missing exchange is
/// created, so a rejected rating leaves no trace.
pub fn add(
    store: &mut RatingStore,
    exchange: &str,
    criterion: &str,
    rating: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let rating: Rating = rating.parse()?;
    if !store.criteria().contains(criterion) {
        return Err(RatingError::UnknownCriterion {
            criterion: criterion.to_string(),
            configured: store.criteria().as_slice().to_vec(),
        }
        .into());
    }

    ensure_exchange(store, exchange)?;
    store.record_rating(exchange, criterion, i64::from(rating))?;

    RatingResult {
        exchange: exchange.to_string(),
        criterion: criterion.to_string(),
        rating: rating.value(),
    }
    .render(mode);
    Ok(())
}
