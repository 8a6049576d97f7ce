//! lbtas - Leveson-Based Trade Assessment Scale
//!
//! This library records ratings of commerce exchanges on a six-point scale
//! (-1 to 4) across configurable criteria, persists them as a JSON
//! snapshot, and produces summaries and store-wide reports.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod prompt;

pub use crate::core::models::{Criteria, Rating};
pub use crate::core::{RatingError, RatingStore, StoreWarning};
