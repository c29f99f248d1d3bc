//! Normalized weather output models.
//!
//! Numeric fields keep the provider's JSON numbers (`serde_json::Number`) so
//! integers are not widened to floats on the way through the gateway.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One weather condition entry. Deserialization drops everything except the
/// id and description the client contract exposes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConditionSummary {
    pub id: Option<Number>,
    pub description: Option<String>,
}

/// Temperature and humidity block.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TempHumidity {
    pub temp: Option<Number>,
    pub humidity: Option<Number>,
}

/// Wind block.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WindSummary {
    pub speed: Option<Number>,
    pub deg: Option<Number>,
}

/// Sunrise/sunset epoch timestamps; null when the provider omits them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SunTimes {
    pub sunrise: Option<Number>,
    pub sunset: Option<Number>,
}

/// Normalized current conditions returned by the weather endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CurrentConditions {
    pub weather: Vec<ConditionSummary>,
    pub main: TempHumidity,
    pub wind: WindSummary,
    /// Precipitation detail, e.g. `{"1h": 0.15}`; empty object when the
    /// provider reports none.
    #[serde(default)]
    pub rain: Map<String, Value>,
    pub sys: SunTimes,
}

/// Max/min temperatures for one forecast day.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForecastTemps {
    pub temp_max: Option<Number>,
    pub temp_min: Option<Number>,
}

/// One normalized forecast day.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForecastEntry {
    pub main: ForecastTemps,
}

/// Normalized forecast list, at most 8 days in upstream order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForecastList {
    pub list: Vec<ForecastEntry>,
}
