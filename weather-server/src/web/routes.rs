//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::compare;
use crate::visualcrossing::{CityInfo, WeatherApiError, WeatherSource};

use super::error::AppError;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/forecast/:city", get(forecast_by_city))
        .route("/compare-daylight/:city1/:city2", get(compare_daylight))
        .route("/check-rain/:city1/:city2", get(check_rain))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Raw forecast for one city, passed through as JSON.
///
/// Errors carry no body; upstream 4xx statuses are passed through as-is.
async fn forecast_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<CityInfo>, StatusCode> {
    if city.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    match state.weather.forecast_by_city(&city).await {
        Ok(info) => Ok(Json(info)),
        Err(e) => {
            let status = AppError::from(e).status();
            warn!(%city, %status, "forecast lookup failed");
            Err(status)
        }
    }
}

/// Which of two cities has the longest day.
async fn compare_daylight(
    State(state): State<AppState>,
    Path((city1, city2)): Path<(String, String)>,
) -> Result<String, AppError> {
    compare::validate_city_names(&city1, &city2)?;

    let (info1, info2) = fetch_pair(&state, &city1, &city2).await?;
    let verdict = compare::compare_daylight(&info1, &city1, &info2, &city2)?;

    info!(%city1, %city2, %verdict, "daylight compared");
    Ok(verdict)
}

/// Where it is currently raining out of two cities.
async fn check_rain(
    State(state): State<AppState>,
    Path((city1, city2)): Path<(String, String)>,
) -> Result<String, AppError> {
    compare::validate_city_names(&city1, &city2)?;

    let (info1, info2) = fetch_pair(&state, &city1, &city2).await?;
    let verdict = compare::check_rain(&info1, &city1, &info2, &city2);

    info!(%city1, %city2, %verdict, "rain checked");
    Ok(verdict)
}

/// Fetch both cities in order, so a failure for `city1` is always the one reported.
async fn fetch_pair(
    state: &AppState,
    city1: &str,
    city2: &str,
) -> Result<(CityInfo, CityInfo), WeatherApiError> {
    let info1 = state.weather.forecast_by_city(city1).await?;
    let info2 = state.weather.forecast_by_city(city2).await?;
    Ok((info1, info2))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::response::{IntoResponse, Response};

    use crate::visualcrossing::{CurrentConditions, MockWeatherClient};

    async fn mock_state() -> AppState {
        let mock = MockWeatherClient::from_dir("data/mock_cities").unwrap();

        mock.insert_city(
            "Nowhere",
            CityInfo {
                current_conditions: Some(CurrentConditions {
                    conditions: Some("Clear".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await;
        mock.insert_city("Void", CityInfo::default()).await;
        mock.insert_empty("Empty").await;
        mock.fail_with_status("Locked", 401).await;
        mock.fail_with_status("Down", 503).await;
        mock.fail_with_status("Forbidden", 403).await;

        AppState::new(mock)
    }

    fn cities(city1: &str, city2: &str) -> Path<(String, String)> {
        Path((city1.to_string(), city2.to_string()))
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn daylight(city1: &str, city2: &str) -> (StatusCode, String) {
        let response = compare_daylight(State(mock_state().await), cities(city1, city2))
            .await
            .into_response();
        (response.status(), body_text(response).await)
    }

    async fn rain(city1: &str, city2: &str) -> (StatusCode, String) {
        let response = check_rain(State(mock_state().await), cities(city1, city2))
            .await
            .into_response();
        (response.status(), body_text(response).await)
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn longest_day() {
        assert_eq!(
            daylight("London", "Singapore").await,
            (StatusCode::OK, "London has the longest day".to_string())
        );
        assert_eq!(
            daylight("Singapore", "London").await,
            (StatusCode::OK, "London has the longest day".to_string())
        );
    }

    #[tokio::test]
    async fn longest_day_with_sunset_after_midnight() {
        assert_eq!(
            daylight("London", "Reykjavik").await,
            (StatusCode::OK, "Reykjavik has the longest day".to_string())
        );
    }

    #[tokio::test]
    async fn same_city_is_a_tie() {
        assert_eq!(
            daylight("London", "London").await,
            (
                StatusCode::OK,
                "Both cities have equal daylight hours".to_string()
            )
        );
    }

    #[tokio::test]
    async fn blank_city_names_rejected() {
        for (a, b) in [(" ", "London"), ("London", "  ")] {
            assert_eq!(
                daylight(a, b).await,
                (
                    StatusCode::BAD_REQUEST,
                    "City names cannot be empty".to_string()
                )
            );
            assert_eq!(
                rain(a, b).await,
                (
                    StatusCode::BAD_REQUEST,
                    "City names cannot be empty".to_string()
                )
            );
        }
    }

    #[tokio::test]
    async fn unknown_city_passes_upstream_status_through() {
        let (status, body) = daylight("London", "Atlantis").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            "Error accessing weather data: API error 400: Bad API Request:Invalid location parameter value."
        );
    }

    #[tokio::test]
    async fn unauthorized_passes_through() {
        let (status, body) = rain("Locked", "London").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            "Error accessing weather data: unauthorized (invalid API key)"
        );
    }

    #[tokio::test]
    async fn forbidden_keeps_its_status() {
        let (status, body) = rain("Forbidden", "London").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            body,
            "Error accessing weather data: API error 403: mock failure for Forbidden"
        );

        let (status, _) = daylight("London", "Forbidden").await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let err = forecast_by_city(State(mock_state().await), Path("Forbidden".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn first_city_failure_is_reported() {
        assert_eq!(rain("Atlantis", "Locked").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(rain("Locked", "Atlantis").await.0, StatusCode::UNAUTHORIZED);
        assert_eq!(
            daylight("Down", "Locked").await.0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            daylight("Locked", "Down").await.0,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn upstream_outage_is_internal_error() {
        let (status, body) = daylight("London", "Down").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            "An unexpected error occurred: API error 503: mock failure for Down"
        );
    }

    #[tokio::test]
    async fn empty_upstream_response_is_not_found() {
        let (status, body) = rain("Empty", "London").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn missing_sun_times_is_internal_error() {
        let (status, body) = daylight("London", "Nowhere").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            "An unexpected error occurred: Missing sunrise/sunset data for Nowhere"
        );

        let (status, body) = daylight("Void", "London").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            "An unexpected error occurred: No weather conditions available for Void"
        );
    }

    #[tokio::test]
    async fn rain_verdicts() {
        assert_eq!(
            rain("London", "Reykjavik").await,
            (StatusCode::OK, "It is raining in London".to_string())
        );
        assert_eq!(
            rain("Reykjavik", "Singapore").await,
            (StatusCode::OK, "It is raining in Singapore".to_string())
        );
        assert_eq!(
            rain("Singapore", "London").await,
            (
                StatusCode::OK,
                "It is raining in both Singapore and London".to_string()
            )
        );
        assert_eq!(
            rain("Reykjavik", "Nowhere").await,
            (
                StatusCode::OK,
                "It is not raining in either city".to_string()
            )
        );
    }

    #[tokio::test]
    async fn rain_with_no_conditions_is_dry() {
        assert_eq!(
            rain("Void", "Reykjavik").await,
            (
                StatusCode::OK,
                "It is not raining in either city".to_string()
            )
        );
    }

    #[tokio::test]
    async fn forecast_returns_city_info() {
        let state = mock_state().await;
        let Json(info) = forecast_by_city(State(state), Path("London".to_string()))
            .await
            .unwrap();
        assert_eq!(
            info.resolved_address.as_deref(),
            Some("London, England, United Kingdom")
        );
    }

    #[tokio::test]
    async fn forecast_errors_have_status_only() {
        let state = mock_state().await;

        let err = forecast_by_city(State(state.clone()), Path("  ".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);

        let err = forecast_by_city(State(state.clone()), Path("Atlantis".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);

        let err = forecast_by_city(State(state.clone()), Path("Locked".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::UNAUTHORIZED);

        let err = forecast_by_city(State(state.clone()), Path("Empty".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);

        let err = forecast_by_city(State(state), Path("Down".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// Serve the real router on an ephemeral port and return its base URL.
    async fn spawn_app() -> String {
        let app = create_router(mock_state().await);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn routes_over_http() {
        let base = spawn_app().await;
        let http = reqwest::Client::new();

        let response = http.get(format!("{base}/health")).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), "ok");

        let response = http
            .get(format!("{base}/compare-daylight/London/Singapore"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.starts_with("text/plain"))
        );
        assert_eq!(response.text().await.unwrap(), "London has the longest day");

        let response = http
            .get(format!("{base}/check-rain/London/Reykjavik"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.text().await.unwrap(), "It is raining in London");

        let response = http
            .get(format!("{base}/check-rain/%20/Reykjavik"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);

        let response = http
            .get(format!("{base}/forecast/Singapore"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            json["currentConditions"]["conditions"],
            "Thunderstorm, Rain, Overcast"
        );
    }
}
