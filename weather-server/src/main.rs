use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use weather_server::config::{API_KEY_VAR, ServerConfig};
use weather_server::visualcrossing::{MockWeatherClient, VisualCrossingClient};
use weather_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "weather_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    let state = match &config.mock_dir {
        Some(dir) => {
            let mock = MockWeatherClient::from_dir(dir).expect("Failed to load mock city data");
            info!(
                dir = %dir.display(),
                cities = ?mock.available_cities().await,
                "serving mock weather data"
            );
            AppState::new(mock)
        }
        None => {
            if config.api_key.is_empty() {
                warn!("{API_KEY_VAR} not set. API calls will fail.");
            }
            let client = VisualCrossingClient::new(config.upstream())
                .expect("Failed to create Visual Crossing client");
            info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "using Visual Crossing");
            AppState::new(client)
        }
    };

    let app = create_router(state);

    let addr = config.bind_addr;
    info!("Weather comparison server listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                          - Health check");
    info!("  GET  /forecast/{{city}}                 - Raw forecast for a city");
    info!("  GET  /compare-daylight/{{city1}}/{{city2}} - Which city has the longest day");
    info!("  GET  /check-rain/{{city1}}/{{city2}}       - Where it is raining");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
