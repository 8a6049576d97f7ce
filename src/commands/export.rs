//! Export command - write all ratings as CSV or JSON

use std::path::Path;

use lbtas::adapters::{ExportFormat, export as export_store};
use lbtas::core::RatingStore;
use lbtas::output::{ExportResult, OutputMode};

/// Export the store to `output` in the requested format
pub fn export(
    store: &RatingStore,
    format: &str,
    output: &Path,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let records = export_store::export(store, format, output)?;

    ExportResult {
        format: format.to_string(),
        path: output.display().to_string(),
        records,
    }
    .render(mode);
    Ok(())
}
