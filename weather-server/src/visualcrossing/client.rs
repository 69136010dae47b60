//! Visual Crossing Timeline HTTP client.
//!
//! Fetches forecasts by location name. The API key travels as the `key`
//! query parameter, so it is stripped from any error that would otherwise
//! echo the request URL.

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info, warn};

use super::error::WeatherApiError;
use super::source::WeatherSource;
use super::types::CityInfo;

/// Default base URL for the Timeline API.
pub const DEFAULT_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Visual Crossing client.
#[derive(Debug, Clone)]
pub struct VisualCrossingConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production Visual Crossing)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl VisualCrossingConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Visual Crossing Timeline API client.
#[derive(Debug, Clone)]
pub struct VisualCrossingClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl VisualCrossingClient {
    /// Create a new client with the given configuration.
    pub fn new(config: VisualCrossingConfig) -> Result<Self, WeatherApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            WeatherApiError::InvalidConfig(format!("base URL {}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(WeatherApiError::InvalidConfig(format!(
                "base URL {} cannot take a path",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    /// URL for a city's timeline, with the city as a single encoded path segment.
    fn city_url(&self, city: &str) -> Result<Url, WeatherApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| WeatherApiError::InvalidConfig("base URL cannot take a path".into()))?
            .pop_if_empty()
            .push(city);
        Ok(url)
    }

    /// Get the forecast and current conditions for a city.
    ///
    /// Returns `CityNotFound` when the API answers 200 with an empty or
    /// `null` body.
    pub async fn forecast_by_city(&self, city: &str) -> Result<CityInfo, WeatherApiError> {
        let url = self.city_url(city)?;
        info!(city, "fetching forecast from Visual Crossing");

        let response = self
            .http
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(city, status = status.as_u16(), "Visual Crossing returned an error");
            return Err(WeatherApiError::from_status(status.as_u16(), body));
        }

        let body = response.text().await?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(WeatherApiError::CityNotFound(city.to_string()));
        }

        let info: CityInfo = serde_json::from_str(trimmed).map_err(|e| WeatherApiError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        debug!(
            city,
            resolved = info.resolved_address.as_deref().unwrap_or("?"),
            "forecast received"
        );
        Ok(info)
    }
}

#[async_trait]
impl WeatherSource for VisualCrossingClient {
    async fn forecast_by_city(&self, city: &str) -> Result<CityInfo, WeatherApiError> {
        VisualCrossingClient::forecast_by_city(self, city).await
    }
}
