//! Domain types for city weather comparisons.
//!
//! Everything here is pure and synchronous: parsing sun times, measuring
//! daylight, classifying rain and wording the verdicts. Nothing in this
//! module performs I/O or holds state between calls.

mod daylight;
mod error;
mod rain;
mod time;
mod verdict;

pub use daylight::DaylightWindow;
pub use error::ComparisonError;
pub use rain::{RAIN_KEYWORDS, is_raining};
pub use time::{MINUTES_PER_DAY, TimeError, TimeOfDay};
pub use verdict::{DaylightVerdict, RainVerdict, compare_daylight, compare_rain};
