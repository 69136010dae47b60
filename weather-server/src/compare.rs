//! City-to-city comparisons over fetched weather records.
//!
//! Pulls sunrise, sunset and conditions out of two `CityInfo` records and
//! hands them to the domain layer. Only the shape of the records is checked
//! here; fetching them, and any transport failure, belongs to the caller.

use tracing::debug;

use crate::domain::{
    ComparisonError, DaylightWindow, TimeOfDay, compare_daylight as daylight_verdict,
    compare_rain, is_raining,
};
use crate::visualcrossing::CityInfo;

/// Description used when a record has no current conditions text.
pub const UNKNOWN_CONDITIONS: &str = "Unknown";

/// Reject blank city names before any upstream request is made.
pub fn validate_city_names(city1: &str, city2: &str) -> Result<(), ComparisonError> {
    if city1.trim().is_empty() || city2.trim().is_empty() {
        return Err(ComparisonError::empty_city_names());
    }
    Ok(())
}

/// Extract the current daylight window for a city.
pub fn daylight_window(info: &CityInfo, city: &str) -> Result<DaylightWindow, ComparisonError> {
    let current = info
        .current_conditions
        .as_ref()
        .ok_or_else(|| ComparisonError::no_conditions(city))?;

    let (Some(sunrise), Some(sunset)) = (current.sunrise.as_deref(), current.sunset.as_deref())
    else {
        return Err(ComparisonError::missing_sun_times(city));
    };

    let parse = |field: &'static str, value: &str| {
        TimeOfDay::parse_hhmmss(value).map_err(|source| ComparisonError::Parse {
            city: city.to_string(),
            field,
            source,
        })
    };

    Ok(DaylightWindow::new(
        parse("sunrise", sunrise)?,
        parse("sunset", sunset)?,
    ))
}

/// Current conditions text for a city, or [`UNKNOWN_CONDITIONS`] if absent.
pub fn current_conditions(info: &CityInfo) -> &str {
    info.current_conditions
        .as_ref()
        .and_then(|c| c.conditions.as_deref())
        .unwrap_or(UNKNOWN_CONDITIONS)
}

/// Say which of two cities has the longer day today.
pub fn compare_daylight(
    city1_info: &CityInfo,
    city1: &str,
    city2_info: &CityInfo,
    city2: &str,
) -> Result<String, ComparisonError> {
    let window1 = daylight_window(city1_info, city1)?;
    let window2 = daylight_window(city2_info, city2)?;

    for (city, window) in [(city1, &window1), (city2, &window2)] {
        if window.wraps_midnight() {
            debug!(
                city,
                sunrise = %window.sunrise(),
                sunset = %window.sunset(),
                "sunset before sunrise, counting it as next day"
            );
        }
    }

    let minutes1 = window1.daylight_minutes();
    let minutes2 = window2.daylight_minutes();
    debug!(city1, minutes1, city2, minutes2, "daylight compared");

    Ok(daylight_verdict(minutes1, minutes2, city1, city2))
}

/// Say in which of two cities it is currently raining.
pub fn check_rain(city1_info: &CityInfo, city1: &str, city2_info: &CityInfo, city2: &str) -> String {
    let conditions1 = current_conditions(city1_info);
    let conditions2 = current_conditions(city2_info);
    debug!(city1, conditions1, city2, conditions2, "checking rain");

    compare_rain(
        is_raining(Some(conditions1)),
        is_raining(Some(conditions2)),
        city1,
        city2,
    )
}
