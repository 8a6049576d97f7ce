//! Rating values
//!
//! A rating is an integer on the six-point trade assessment scale, from
//! `-1` (no trust) up to `4` (delight). Values outside that range never make
//! it into a [`Rating`].

use serde::{Deserialize, Serialize};

use crate::core::error::RatingError;

/// A single score on the assessment scale, always within `-1..=4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(i8);

impl Rating {
    /// Lowest value on the scale
    pub const MIN: i8 = -1;
    /// Highest value on the scale
    pub const MAX: i8 = 4;

    /// Validate an integer as a rating
    pub fn new(value: i64) -> Result<Self, RatingError> {
        i8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or_else(|| RatingError::InvalidRating(value.to_string()))
    }

    /// The raw integer value
    #[must_use]
    pub const fn value(self) -> i8 {
        self.0
    }

    /// Every level of the scale, lowest first
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Short name of this level
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            -1 => "No Trust",
            0 => "Cynical Satisfaction",
            1 => "Basic Promise",
            2 => "Basic Satisfaction",
            3 => "No Negative Consequences",
            _ => "Delight",
        }
    }

    /// What an interaction at this level looks like
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self.0 {
            -1 => {
                "User was harmed, exploited, or received a product or service with no \
                 discipline or malicious intent."
            },
            0 => {
                "Interaction fulfills a basic promise requiring little to no discipline \
                 toward user satisfaction."
            },
            1 => "Interaction meets all articulated user demands, no more.",
            2 => {
                "Interaction meets socially acceptable standards exceeding articulated user \
                 demands."
            },
            3 => "Interaction designed to prevent loss, exceed basic quality.",
            _ => {
                "Interaction anticipates the evolution of user practices and concerns \
                 post-transaction."
            },
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        Self::from(rating.0)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Rating {
    type Err = RatingError;

    /// Parses an integer rating; fractional or non-numeric text is rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 =
            trimmed.parse().map_err(|_| RatingError::InvalidRating(trimmed.to_string()))?;
        Self::new(value)
    }
}
