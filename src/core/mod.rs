//! Core domain logic for lbtas
//!
//! This module contains the rating engine with no direct I/O. Persistence
//! goes through the [`ports::SnapshotStore`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Rating, Criteria, ExchangeRecord, Report)
//! - `services/` - The rating store and aggregation
//! - `ports/` - Trait definitions for persistence targets
//! - `error` - Errors and non-fatal warnings

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{RatingError, StoreWarning};
pub use services::RatingStore;
