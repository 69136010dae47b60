//! Application state for the web layer.

use std::sync::Arc;

use crate::visualcrossing::WeatherSource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Where city weather data comes from (live API or mock)
    pub weather: Arc<dyn WeatherSource>,
}

impl AppState {
    /// Create a new app state around a weather source.
    pub fn new(weather: impl WeatherSource + 'static) -> Self {
        Self {
            weather: Arc::new(weather),
        }
    }
}
