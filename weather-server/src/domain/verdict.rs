//! Two-city comparison outcomes and their wording.

/// Which of two cities has more daylight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaylightVerdict {
    FirstLonger,
    SecondLonger,
    Equal,
}

impl DaylightVerdict {
    /// Compare two daylight durations in minutes.
    pub fn from_minutes(first: u32, second: u32) -> Self {
        if first > second {
            DaylightVerdict::FirstLonger
        } else if second > first {
            DaylightVerdict::SecondLonger
        } else {
            DaylightVerdict::Equal
        }
    }

    /// Render the verdict for the given city names.
    pub fn message(&self, first: &str, second: &str) -> String {
        match self {
            DaylightVerdict::FirstLonger => format!("{first} has the longest day"),
            DaylightVerdict::SecondLonger => format!("{second} has the longest day"),
            DaylightVerdict::Equal => "Both cities have equal daylight hours".to_string(),
        }
    }
}

/// Where it is raining out of two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainVerdict {
    FirstRaining,
    SecondRaining,
    BothRaining,
    NeitherRaining,
}

impl RainVerdict {
    /// Classify from whether each city is currently raining.
    pub fn from_flags(first: bool, second: bool) -> Self {
        match (first, second) {
            (true, true) => RainVerdict::BothRaining,
            (true, false) => RainVerdict::FirstRaining,
            (false, true) => RainVerdict::SecondRaining,
            (false, false) => RainVerdict::NeitherRaining,
        }
    }

    /// Render the verdict for the given city names.
    pub fn message(&self, first: &str, second: &str) -> String {
        match self {
            RainVerdict::BothRaining => format!("It is raining in both {first} and {second}"),
            RainVerdict::FirstRaining => format!("It is raining in {first}"),
            RainVerdict::SecondRaining => format!("It is raining in {second}"),
            RainVerdict::NeitherRaining => "It is not raining in either city".to_string(),
        }
    }
}

/// Describe which city has the longer day.
///
/// # Examples
///
/// ```
/// use weather_server::domain::compare_daylight;
///
/// assert_eq!(compare_daylight(700, 650, "Oslo", "Rome"), "Oslo has the longest day");
/// assert_eq!(
///     compare_daylight(700, 700, "Oslo", "Rome"),
///     "Both cities have equal daylight hours"
/// );
/// ```
pub fn compare_daylight(minutes1: u32, minutes2: u32, name1: &str, name2: &str) -> String {
    DaylightVerdict::from_minutes(minutes1, minutes2).message(name1, name2)
}

/// Describe which cities are rainy.
pub fn compare_rain(raining1: bool, raining2: bool, name1: &str, name2: &str) -> String {
    RainVerdict::from_flags(raining1, raining2).message(name1, name2)
}
