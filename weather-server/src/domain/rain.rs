//! Rain detection from free-text condition descriptions.

/// Substrings that mark a condition description as rainy.
///
/// Matched case-insensitively anywhere in the description, so "Showers"
/// and "Rain, Overcast" both count.
pub const RAIN_KEYWORDS: [&str; 9] = [
    "rain",
    "drizzle",
    "shower",
    "thunderstorm",
    "precipitation",
    "downpour",
    "rainfall",
    "raining",
    "stormy",
];

/// Whether a condition description indicates rain.
///
/// An absent description is not rain.
///
/// # Examples
///
/// ```
/// use weather_server::domain::is_raining;
///
/// assert!(is_raining(Some("Light Rain Showers")));
/// assert!(!is_raining(Some("Partially cloudy")));
/// assert!(!is_raining(None));
/// ```
pub fn is_raining(conditions: Option<&str>) -> bool {
    let Some(conditions) = conditions else {
        return false;
    };
    let lower = conditions.to_lowercase();
    RAIN_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}
