//! Rating criteria (categories)
//!
//! The category set is ordered and fixed for the lifetime of a store.

use serde::Serialize;
use thiserror::Error;

use super::snapshot::METADATA_KEY;

/// Categories used when none are configured
pub const DEFAULT_CATEGORIES: [&str; 4] = ["reliability", "usability", "performance", "support"];

/// Errors that can occur when building a category set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    /// No categories were given
    #[error("at least one rating category is required")]
    Empty,

    /// A category name was empty or whitespace
    #[error("category names must not be blank")]
    Blank,

    /// The same category was listed twice
    #[error("duplicate category: {0}")]
    Duplicate(String),

    /// The name collides with a key used by the snapshot format
    #[error("'{0}' is reserved and cannot be used as a category")]
    Reserved(String),
}

/// Ordered, duplicate-free set of rating categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Criteria(Vec<String>);

impl Criteria {
    /// Build a category set, preserving the given order
    pub fn new<I, S>(names: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_string();
            if name.is_empty() {
                return Err(CriteriaError::Blank);
            }
            if name == METADATA_KEY {
                return Err(CriteriaError::Reserved(name));
            }
            if categories.contains(&name) {
                return Err(CriteriaError::Duplicate(name));
            }
            categories.push(name);
        }

        if categories.is_empty() {
            return Err(CriteriaError::Empty);
        }
        Ok(Self(categories))
    }

    /// Whether `name` is one of the configured categories (case-sensitive)
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    /// Iterate categories in configured order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Categories as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of categories
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no categories (never true once constructed)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self(DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect())
    }
}

impl std::fmt::Display for Criteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
