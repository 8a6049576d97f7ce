//! Report command - store-wide statistics

use lbtas::core::RatingStore;
use lbtas::output::{OutputMode, ReportResult};

/// Print the system report
pub fn report(store: &RatingStore, mode: OutputMode) -> anyhow::Result<()> {
    ReportResult {
        report: store.generate_report(),
    }
    .render(mode);
    Ok(())
}
