//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::domain::ComparisonError;
use crate::visualcrossing::WeatherApiError;

/// Application error type for the comparison endpoints.
///
/// Bodies are plain text, like the successful responses.
#[derive(Debug)]
pub enum AppError {
    /// The request itself is unusable
    BadRequest { message: String },
    /// Upstream returned no data for a city
    NotFound { message: String },
    /// Upstream rejected our request with a 4xx status
    Upstream { status: StatusCode, message: String },
    /// Anything else, including bad data in a successful upstream response
    Internal { message: String },
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { status, .. } => *status,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<WeatherApiError> for AppError {
    fn from(e: WeatherApiError) -> Self {
        if let WeatherApiError::CityNotFound(_) = e {
            return AppError::NotFound {
                message: e.to_string(),
            };
        }

        let upstream_client_status = e
            .upstream_status()
            .filter(|_| e.is_client_error())
            .and_then(|s| StatusCode::from_u16(s).ok());

        match upstream_client_status {
            Some(status) => AppError::Upstream {
                status,
                message: e.to_string(),
            },
            None => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<ComparisonError> for AppError {
    fn from(e: ComparisonError) -> Self {
        match e {
            ComparisonError::Validation(message) => AppError::BadRequest { message },
            ComparisonError::MissingData(_) | ComparisonError::Parse { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::BadRequest { message } => {
                warn!(%status, %message, "rejected request");
                message
            }
            AppError::NotFound { message } => {
                warn!(%status, %message, "no data");
                String::new()
            }
            AppError::Upstream { message, .. } => {
                warn!(%status, %message, "upstream rejected request");
                format!("Error accessing weather data: {message}")
            }
            AppError::Internal { message } => {
                error!(%status, %message, "request failed");
                format!("An unexpected error occurred: {message}")
            }
        };

        (status, body).into_response()
    }
}
