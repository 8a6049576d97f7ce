//! Business logic services
//!
//! - [`aggregate`] - Averages, summaries and the store-wide report
//! - [`rating_store`] - The rating store: validation, mutation, persistence

pub mod aggregate;
pub mod rating_store;

pub use aggregate::{RANKING_SIZE, build_report, mean, summarize};
pub use rating_store::RatingStore;
