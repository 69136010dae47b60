//! Comparison error types.
//!
//! These errors describe requests the comparison core can't answer from the
//! data it was given. They are distinct from upstream API/IO errors.

use super::TimeError;

/// Errors raised while comparing two cities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    /// Caller supplied an unusable city name
    #[error("{0}")]
    Validation(String),

    /// Upstream record lacks a field the comparison needs
    #[error("{0}")]
    MissingData(String),

    /// A time field could not be parsed
    #[error("invalid {field} for {city}: {source}")]
    Parse {
        city: String,
        field: &'static str,
        #[source]
        source: TimeError,
    },
}

impl ComparisonError {
    /// One or both city names were blank.
    pub fn empty_city_names() -> Self {
        ComparisonError::Validation("City names cannot be empty".to_string())
    }

    /// The record for `city` has no current conditions block.
    pub fn no_conditions(city: &str) -> Self {
        ComparisonError::MissingData(format!("No weather conditions available for {city}"))
    }

    /// The current conditions for `city` lack sunrise or sunset.
    pub fn missing_sun_times(city: &str) -> Self {
        ComparisonError::MissingData(format!("Missing sunrise/sunset data for {city}"))
    }
}
