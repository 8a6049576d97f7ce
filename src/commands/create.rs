//! Create command - register a new exchange

use lbtas::core::RatingStore;
use lbtas::output::{OperationResult, OutputMode};

/// Register `exchange`; fails if it already exists
pub fn create(store: &mut RatingStore, exchange: &str, mode: OutputMode) -> anyhow::Result<()> {
    store.create_exchange(exchange)?;

    OperationResult {
        success: true,
        message: format!("Created exchange '{exchange}'"),
    }
    .render(mode);
    Ok(())
}
