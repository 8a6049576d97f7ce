//! Command implementations

mod create;
mod export;
mod init;
mod rate;
mod report;
mod view;

pub use create::create;
pub use export::export;
pub use init::init;
pub use rate::{add, rate};
pub use report::report;
pub use view::{list, view};

use lbtas::adapters::JsonFileStore;
use lbtas::config::Config;
use lbtas::core::RatingStore;

/// Open the rating store described by `config`
pub fn open_store(config: &Config) -> anyhow::Result<RatingStore> {
    let criteria = config.criteria()?;
    log::debug!(
        "Opening {} with categories: {criteria}",
        config.storage.path.display()
    );
    Ok(RatingStore::open(criteria, Box::new(JsonFileStore::new(&config.storage.path))))
}

/// Create `exchange` unless it already exists
fn ensure_exchange(store: &mut RatingStore, exchange: &str) -> anyhow::Result<()> {
    if !store.contains(exchange) {
        store.create_exchange(exchange)?;
    }
    Ok(())
}
