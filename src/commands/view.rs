//! View and list commands

use lbtas::core::RatingStore;
use lbtas::output::{ExchangeListEntry, ExchangeListResult, OutputMode, SummaryResult};

/// Show per-category averages for one exchange
pub fn view(store: &RatingStore, exchange: &str, mode: OutputMode) -> anyhow::Result<()> {
    let summary = store.summarize(exchange)?;
    SummaryResult { summary }.render(mode);
    Ok(())
}

/// List every exchange with its overall average
pub fn list(store: &RatingStore, mode: OutputMode) -> anyhow::Result<()> {
    let mut names = store.list_exchanges();
    names.sort_unstable();

    let mut exchanges = Vec::with_capacity(names.len());
    for name in names {
        let summary = store.summarize(name)?;
        let total_ratings = store.exchange(name).map_or(0, |r| r.metadata().total_ratings);
        exchanges.push(ExchangeListEntry {
            name: name.to_string(),
            average: summary.overall(),
            total_ratings,
        });
    }

    ExchangeListResult { exchanges }.render(mode);
    Ok(())
}
