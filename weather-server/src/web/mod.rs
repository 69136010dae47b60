//! Web layer for the weather comparison server.
//!
//! Provides HTTP endpoints for fetching forecasts and comparing two cities.

mod error;
mod routes;
mod state;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
