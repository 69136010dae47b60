//! Visual Crossing Timeline API client.
//!
//! Key characteristics of the Timeline API:
//! - Locations are addressed by free-text name in the URL path
//! - Sunrise/sunset are local "HH:MM:SS" strings with no date or offset
//! - Unresolvable locations are rejected with 400, not 404

mod client;
mod error;
mod mock;
mod source;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, VisualCrossingClient, VisualCrossingConfig};
pub use error::WeatherApiError;
pub use mock::MockWeatherClient;
pub use source::WeatherSource;
pub use types::{CityInfo, CurrentConditions, Day};
