//! Daylight duration between sunrise and sunset.

use super::time::{MINUTES_PER_DAY, TimeOfDay};

/// Sunrise and sunset for one city on one day.
///
/// # Examples
///
/// ```
/// use weather_server::domain::{DaylightWindow, TimeOfDay};
///
/// let window = DaylightWindow::new(
///     TimeOfDay::parse_hhmmss("06:00:00").unwrap(),
///     TimeOfDay::parse_hhmmss("18:00:00").unwrap(),
/// );
/// assert_eq!(window.daylight_minutes(), 720);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaylightWindow {
    sunrise: TimeOfDay,
    sunset: TimeOfDay,
}

impl DaylightWindow {
    /// Create a window from sunrise and sunset on the same local day.
    pub fn new(sunrise: TimeOfDay, sunset: TimeOfDay) -> Self {
        Self { sunrise, sunset }
    }

    /// Returns the sunrise time.
    pub fn sunrise(&self) -> TimeOfDay {
        self.sunrise
    }

    /// Returns the sunset time.
    pub fn sunset(&self) -> TimeOfDay {
        self.sunset
    }

    /// Whether sunset's clock value is earlier than sunrise's.
    ///
    /// When true, sunset is taken to fall on the following day. This also
    /// covers upstream data where sunset genuinely precedes sunrise; the two
    /// cases can't be told apart from times alone.
    pub fn wraps_midnight(&self) -> bool {
        self.sunset.total_minutes() < self.sunrise.total_minutes()
    }

    /// Minutes of daylight, at minute granularity.
    ///
    /// Always in `0..1440`. Windows longer than a day (polar day) are not
    /// representable.
    pub fn daylight_minutes(&self) -> u32 {
        let sunrise = self.sunrise.total_minutes();
        let sunset = self.sunset.total_minutes();
        if sunset >= sunrise {
            sunset - sunrise
        } else {
            sunset + MINUTES_PER_DAY - sunrise
        }
    }
}
