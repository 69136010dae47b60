//! Visual Crossing client error types.

use std::fmt;

/// Errors from fetching weather data.
#[derive(Debug)]
pub enum WeatherApiError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// API answered successfully but with no data for the city
    CityNotFound(String),

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,

    /// Client could not be built from its configuration
    InvalidConfig(String),
}

impl WeatherApiError {
    /// Build the error for a non-success upstream status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 => WeatherApiError::Unauthorized,
            429 => WeatherApiError::RateLimited,
            _ => WeatherApiError::ApiError {
                status,
                message: message.into(),
            },
        }
    }

    /// The upstream HTTP status this error corresponds to, if any.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            WeatherApiError::ApiError { status, .. } => Some(*status),
            WeatherApiError::Unauthorized => Some(401),
            WeatherApiError::RateLimited => Some(429),
            WeatherApiError::Http(e) => e.status().map(|s| s.as_u16()),
            WeatherApiError::Json { .. }
            | WeatherApiError::CityNotFound(_)
            | WeatherApiError::InvalidConfig(_) => None,
        }
    }

    /// Whether the upstream rejected the request itself (a 4xx status).
    pub fn is_client_error(&self) -> bool {
        self.upstream_status()
            .is_some_and(|status| (400..500).contains(&status))
    }
}

impl fmt::Display for WeatherApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherApiError::Http(e) => write!(f, "HTTP error: {e}"),
            WeatherApiError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            WeatherApiError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            WeatherApiError::CityNotFound(city) => write!(f, "no weather data for {city}"),
            WeatherApiError::RateLimited => write!(f, "rate limited by Visual Crossing API"),
            WeatherApiError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            WeatherApiError::InvalidConfig(msg) => write!(f, "invalid client config: {msg}"),
        }
    }
}

impl std::error::Error for WeatherApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WeatherApiError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WeatherApiError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key as a query parameter
        WeatherApiError::Http(err.without_url())
    }
}
