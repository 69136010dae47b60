//! Mock weather client for running without an API key.
//!
//! Loads city records from JSON files and serves them as if they were live
//! Timeline API responses. Cities can also be registered in memory, or
//! registered to fail with an upstream status, which is how the HTTP layer
//! is tested.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::WeatherApiError;
use super::source::WeatherSource;
use super::types::CityInfo;

/// Body Visual Crossing sends for a location it can't resolve.
const UNKNOWN_LOCATION_MESSAGE: &str = "Bad API Request:Invalid location parameter value.";

/// What the mock returns for a city.
#[derive(Debug, Clone)]
enum MockEntry {
    Found(CityInfo),
    Empty,
    Status(u16),
}

/// Mock client serving canned city data.
///
/// City names are matched exactly, so "London" and "london" are distinct.
#[derive(Clone, Default)]
pub struct MockWeatherClient {
    cities: Arc<RwLock<HashMap<String, MockEntry>>>,
}

impl MockWeatherClient {
    /// Create an empty mock; every lookup fails until cities are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock by loading JSON files from a directory.
    ///
    /// Expects files named `{city}.json` (e.g., `London.json`).
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, WeatherApiError> {
        let cities = load_dir(data_dir.as_ref())?;
        Ok(Self {
            cities: Arc::new(RwLock::new(cities)),
        })
    }

    /// Serve `info` for `city`.
    pub async fn insert_city(&self, city: impl Into<String>, info: CityInfo) {
        self.cities
            .write()
            .await
            .insert(city.into(), MockEntry::Found(info));
    }

    /// Answer `city` with an empty body, as the API does when it has no data.
    pub async fn insert_empty(&self, city: impl Into<String>) {
        self.cities
            .write()
            .await
            .insert(city.into(), MockEntry::Empty);
    }

    /// Make lookups for `city` fail with the given upstream status.
    pub async fn fail_with_status(&self, city: impl Into<String>, status: u16) {
        self.cities
            .write()
            .await
            .insert(city.into(), MockEntry::Status(status));
    }

    /// List cities with data in the mock.
    pub async fn available_cities(&self) -> Vec<String> {
        let cities = self.cities.read().await;
        let mut names: Vec<String> = cities
            .iter()
            .filter(|(_, entry)| matches!(entry, MockEntry::Found(_)))
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Reload mock data from disk, replacing everything registered so far.
    pub async fn reload(&self, data_dir: impl AsRef<Path>) -> Result<(), WeatherApiError> {
        let fresh = load_dir(data_dir.as_ref())?;
        *self.cities.write().await = fresh;
        Ok(())
    }
}

#[async_trait]
impl WeatherSource for MockWeatherClient {
    async fn forecast_by_city(&self, city: &str) -> Result<CityInfo, WeatherApiError> {
        let cities = self.cities.read().await;

        match cities.get(city) {
            Some(MockEntry::Found(info)) => Ok(info.clone()),
            Some(MockEntry::Empty) => Err(WeatherApiError::CityNotFound(city.to_string())),
            Some(MockEntry::Status(status)) => Err(WeatherApiError::from_status(
                *status,
                format!("mock failure for {city}"),
            )),
            None => Err(WeatherApiError::from_status(400, UNKNOWN_LOCATION_MESSAGE)),
        }
    }
}

fn load_dir(data_dir: &Path) -> Result<HashMap<String, MockEntry>, WeatherApiError> {
    let mut cities = HashMap::new();

    let entries = std::fs::read_dir(data_dir).map_err(|e| {
        WeatherApiError::InvalidConfig(format!("failed to read mock data directory: {e}"))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            WeatherApiError::InvalidConfig(format!("failed to read directory entry: {e}"))
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let city = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| WeatherApiError::InvalidConfig(format!("invalid filename: {path:?}")))?
            .to_string();

        let json = std::fs::read_to_string(&path).map_err(|e| {
            WeatherApiError::InvalidConfig(format!("failed to read {path:?}: {e}"))
        })?;

        let info: CityInfo = serde_json::from_str(&json).map_err(|e| WeatherApiError::Json {
            message: format!("{path:?}: {e}"),
            body: None,
        })?;

        cities.insert(city, MockEntry::Found(info));
    }

    if cities.is_empty() {
        return Err(WeatherApiError::InvalidConfig(format!(
            "no mock city files found in {data_dir:?}"
        )));
    }

    Ok(cities)
}
