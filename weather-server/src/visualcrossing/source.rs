//! Abstraction over where city weather data comes from.

use async_trait::async_trait;

use super::error::WeatherApiError;
use super::types::CityInfo;

/// Something that can look up weather data for a city.
///
/// Implemented by the live Visual Crossing client and by the mock client
/// used for development and tests.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the forecast and current conditions for `city`.
    async fn forecast_by_city(&self, city: &str) -> Result<CityInfo, WeatherApiError>;
}
