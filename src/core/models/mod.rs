//! Domain models for lbtas
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Rating`] - A score on the six-point scale
//! - [`Criteria`] - The ordered set of categories an exchange is rated on
//! - [`ExchangeRecord`] - Ratings and metadata for one exchange
//! - [`Snapshot`] - The persisted wire form of a store
//! - [`Summary`] / [`Report`] - Aggregated views

mod criteria;
mod exchange;
mod rating;
mod report;
mod snapshot;

pub use criteria::{Criteria, CriteriaError, DEFAULT_CATEGORIES};
pub use exchange::{ExchangeRecord, Metadata};
pub use rating::Rating;
pub use report::{CategoryAverage, ExchangePerformance, Report, Summary, round2};
pub use snapshot::{METADATA_KEY, Snapshot, SnapshotError, SnapshotMetadata, SnapshotRecord};
