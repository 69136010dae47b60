//! Visual Crossing Timeline API response DTOs.
//!
//! These types map directly to the Timeline API JSON. Every field is an
//! `Option` because the API omits whatever it has no data for, and unknown
//! fields are ignored so new upstream fields don't break parsing.

use serde::{Deserialize, Serialize};

/// Forecast and current conditions for one location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInfo {
    /// The location as requested (e.g. "london").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The location as resolved by the API (e.g. "London, England, United Kingdom").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_address: Option<String>,

    /// Summary of the forecast period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Conditions at the time of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_conditions: Option<CurrentConditions>,

    /// Daily forecast entries.
    #[serde(default)]
    pub days: Vec<Day>,
}

/// The `currentConditions` block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feelslike: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,

    /// Free-text conditions, e.g. "Rain, Partially cloudy".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,

    /// Local sunrise time as "HH:MM:SS".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,

    /// Local sunset time as "HH:MM:SS".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
}

/// One entry in `days`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Date as "YYYY-MM-DD".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempmax: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempmin: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
}
