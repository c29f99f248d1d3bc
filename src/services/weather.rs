//! OpenWeatherMap adapter and response normalization.
//!
//! The only component aware of OpenWeatherMap URL structure and parameter
//! naming. Current conditions and the daily forecast come from One Call 3.0
//! with per-operation exclude sets; air quality comes from the 2.5 air
//! pollution endpoint and passes through unchanged.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use crate::{
    config::{ProviderEndpoints, ProviderSecrets},
    models::query::Coordinates,
    models::weather::{
        ConditionSummary, CurrentConditions, ForecastEntry, ForecastList, ForecastTemps, SunTimes,
        TempHumidity, WindSummary,
    },
    services::{error::GatewayError, http_client::UpstreamClient},
};

const PROVIDER: &str = "openweather";

/// Unit system forced on every One Call request.
const UNITS: &str = "imperial";

/// One Call 3.0 endpoint variants, selected per operation.
#[derive(Debug, Clone, Copy)]
enum OneCallVariant {
    Current,
    Daily,
}

impl OneCallVariant {
    /// Payload blocks excluded for this variant.
    fn exclude(self) -> &'static str {
        match self {
            OneCallVariant::Current => "minutely,hourly,daily,alerts",
            OneCallVariant::Daily => "current,minutely,hourly,alerts",
        }
    }
}

/// OpenWeatherMap provider service.
pub struct WeatherService {
    http: UpstreamClient,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherService {
    pub fn new(
        secrets: &ProviderSecrets,
        endpoints: &ProviderEndpoints,
        http: UpstreamClient,
    ) -> Self {
        Self {
            http,
            base_url: endpoints.openweather_base.clone(),
            api_key: secrets.openweather_api_key.clone(),
        }
    }

    fn key(&self) -> Result<&str, GatewayError> {
        self.api_key
            .as_deref()
            .ok_or(GatewayError::AuthConfig(PROVIDER))
    }

    async fn one_call<T: serde::de::DeserializeOwned>(
        &self,
        coords: &Coordinates,
        variant: OneCallVariant,
    ) -> Result<T, GatewayError> {
        let url = format!("{}/data/3.0/onecall", self.base_url);
        let request = self.http.get(&url).query(&[
            ("lat", coords.lat.to_string()),
            ("lon", coords.lon.to_string()),
            ("exclude", variant.exclude().to_string()),
            ("units", UNITS.to_string()),
            ("appid", self.key()?.to_string()),
        ]);

        self.http.execute_json(PROVIDER, request).await
    }

    /// Current conditions, reshaped to the stable client schema.
    pub async fn current(&self, coords: &Coordinates) -> Result<CurrentConditions, GatewayError> {
        let raw: OneCallCurrentResponse = self.one_call(coords, OneCallVariant::Current).await?;
        Ok(normalize_current(raw.current.unwrap_or_default()))
    }

    /// Daily forecast, truncated to the first 8 entries.
    pub async fn forecast(&self, coords: &Coordinates) -> Result<ForecastList, GatewayError> {
        let raw: OneCallDailyResponse = self.one_call(coords, OneCallVariant::Daily).await?;
        Ok(normalize_forecast(raw.daily))
    }

    /// Air quality, passed through unchanged.
    pub async fn air_pollution(&self, coords: &Coordinates) -> Result<Value, GatewayError> {
        let url = format!("{}/data/2.5/air_pollution", self.base_url);
        let request = self.http.get(&url).query(&[
            ("lat", coords.lat.to_string()),
            ("lon", coords.lon.to_string()),
            ("appid", self.key()?.to_string()),
        ]);

        self.http.execute_json(PROVIDER, request).await
    }
}

/// One Call payload, current block only.
#[derive(Debug, Deserialize, Default)]
struct OneCallCurrentResponse {
    current: Option<CurrentBlock>,
}

/// The One Call `current` block. Every field is optional so absence stays a
/// modeled case rather than a deserialization failure.
#[derive(Debug, Deserialize, Default)]
struct CurrentBlock {
    #[serde(default)]
    weather: Vec<ConditionSummary>,
    temp: Option<Number>,
    humidity: Option<Number>,
    wind_speed: Option<Number>,
    wind_deg: Option<Number>,
    #[serde(default)]
    rain: Map<String, Value>,
    sunrise: Option<Number>,
    sunset: Option<Number>,
}

/// One Call payload, daily block only.
#[derive(Debug, Deserialize, Default)]
struct OneCallDailyResponse {
    #[serde(default)]
    daily: Vec<DailyBlock>,
}

#[derive(Debug, Deserialize, Default)]
struct DailyBlock {
    #[serde(default)]
    temp: DailyTemps,
}

#[derive(Debug, Deserialize, Default)]
struct DailyTemps {
    max: Option<Number>,
    min: Option<Number>,
}

/// Reshape the One Call `current` block into the client schema.
fn normalize_current(current: CurrentBlock) -> CurrentConditions {
    CurrentConditions {
        weather: current.weather,
        main: TempHumidity {
            temp: current.temp,
            humidity: current.humidity,
        },
        wind: WindSummary {
            speed: current.wind_speed,
            deg: current.wind_deg,
        },
        rain: current.rain,
        sys: SunTimes {
            sunrise: current.sunrise,
            sunset: current.sunset,
        },
    }
}

/// Keep at most the first 8 daily entries, max/min temperature only.
fn normalize_forecast(daily: Vec<DailyBlock>) -> ForecastList {
    let list = daily
        .into_iter()
        .take(8)
        .map(|day| ForecastEntry {
            main: ForecastTemps {
                temp_max: day.temp.max,
                temp_min: day.temp.min,
            },
        })
        .collect();

    ForecastList { list }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn current_block_is_reshaped_to_client_schema() {
        let block: CurrentBlock = serde_json::from_value(json!({
            "temp": 72,
            "humidity": 55,
            "wind_speed": 5,
            "wind_deg": 180,
            "weather": [{"id": 800, "main": "Clear", "description": "clear", "icon": "01d"}],
            "sunrise": 1_700_000_000_i64,
            "sunset": 1_700_030_000_i64
        }))
        .unwrap();

        let normalized = serde_json::to_value(normalize_current(block)).unwrap();
        assert_eq!(
            normalized,
            json!({
                "weather": [{"id": 800, "description": "clear"}],
                "main": {"temp": 72, "humidity": 55},
                "wind": {"speed": 5, "deg": 180},
                "rain": {},
                "sys": {"sunrise": 1_700_000_000_i64, "sunset": 1_700_030_000_i64}
            })
        );
    }

    #[test]
    fn missing_precipitation_becomes_empty_object() {
        let normalized = serde_json::to_value(normalize_current(CurrentBlock::default())).unwrap();

        assert_eq!(normalized["rain"], json!({}));
        assert_eq!(normalized["sys"]["sunrise"], json!(null));
        assert_eq!(normalized["sys"]["sunset"], json!(null));
        assert_eq!(normalized["weather"], json!([]));
    }

    #[test]
    fn rain_detail_passes_through() {
        let block: CurrentBlock =
            serde_json::from_value(json!({"rain": {"1h": 0.15}})).unwrap();

        let normalized = serde_json::to_value(normalize_current(block)).unwrap();
        assert_eq!(normalized["rain"], json!({"1h": 0.15}));
    }

    #[test]
    fn forecast_is_truncated_to_eight_days_in_order() {
        let daily: Vec<DailyBlock> = (0..10)
            .map(|i| {
                serde_json::from_value(json!({"temp": {"max": 80 + i, "min": 60 + i}})).unwrap()
            })
            .collect();

        let normalized = serde_json::to_value(normalize_forecast(daily)).unwrap();
        let list = normalized["list"].as_array().unwrap();
        assert_eq!(list.len(), 8);
        for (i, entry) in list.iter().enumerate() {
            assert_eq!(entry["main"]["temp_max"], json!(80 + i as i64));
            assert_eq!(entry["main"]["temp_min"], json!(60 + i as i64));
        }
    }

    #[test]
    fn empty_daily_block_yields_empty_list() {
        let raw: OneCallDailyResponse = serde_json::from_value(json!({})).unwrap();
        let normalized = normalize_forecast(raw.daily);
        assert!(normalized.list.is_empty());
    }
}
