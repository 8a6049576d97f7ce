//! Error and warning types for the rating store
//!
//! [`RatingError`] is returned to the immediate caller and always names the
//! offending exchange, criterion or value. [`StoreWarning`] covers the two
//! failures that degrade gracefully: the in-memory store stays usable.

use thiserror::Error;

/// Errors raised by rating store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// An exchange with this name already exists
    #[error("exchange '{0}' already exists")]
    DuplicateExchange(String),

    /// No exchange with this name exists
    #[error("exchange '{0}' does not exist")]
    UnknownExchange(String),

    /// The criterion is not part of the store's category set
    #[error("criterion '{criterion}' is not a configured category (expected one of: {})", .configured.join(", "))]
    UnknownCriterion {
        /// The criterion that was requested
        criterion: String,
        /// The categories configured on the store
        configured: Vec<String>,
    },

    /// The value is not an integer between -1 and 4
    #[error("rating must be an integer between -1 and 4, got '{0}'")]
    InvalidRating(String),

    /// Exchange names must contain at least one non-whitespace character
    #[error("exchange name must not be empty")]
    EmptyExchangeName,
}

/// Non-fatal storage problems
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreWarning {
    /// Saving the snapshot failed; the previous snapshot is untouched
    #[error("could not save ratings to {location}: {reason}")]
    Persistence {
        /// Where the snapshot was being written
        location: String,
        /// Underlying failure
        reason: String,
    },

    /// Loading the snapshot failed; the store fell back to an empty state
    #[error("could not load ratings from {location}: {reason} (starting with an empty store)")]
    Load {
        /// Where the snapshot was read from
        location: String,
        /// Underlying failure
        reason: String,
    },
}
