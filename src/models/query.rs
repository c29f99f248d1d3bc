//! Inbound request models and envelope validation.
//!
//! Each endpoint deserializes into an all-optional query/body model and then
//! calls `validate()` to obtain the typed envelope, so a missing field is a
//! 400 with a named field rather than a deserialization failure. Validation
//! always runs before any upstream call.

use chrono::NaiveDate;
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

use crate::services::error::GatewayError;

/// Validated coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    fn checked(lat: Option<f64>, lon: Option<f64>) -> Result<Self, GatewayError> {
        let lat = lat.ok_or_else(|| GatewayError::missing_field("lat"))?;
        let lon = lon.ok_or_else(|| GatewayError::missing_field("lon"))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(GatewayError::Validation(
                "latitude must be between -90 and 90".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GatewayError::Validation(
                "longitude must be between -180 and 180".to_string(),
            ));
        }

        Ok(Self { lat, lon })
    }
}

/// Query parameters shared by the weather, forecast and air-pollution
/// endpoints.
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct CoordsQuery {
    /// Latitude coordinate
    pub lat: Option<f64>,
    /// Longitude coordinate
    pub lon: Option<f64>,
}

impl CoordsQuery {
    pub fn validate(&self) -> Result<Coordinates, GatewayError> {
        Coordinates::checked(self.lat, self.lon)
    }
}

/// Query parameters for the tides endpoint.
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct TideQuery {
    /// Latitude coordinate
    pub lat: Option<f64>,
    /// Longitude coordinate
    pub lon: Option<f64>,
    /// Calendar date (YYYY-MM-DD) or "today"
    pub date: Option<String>,
    /// Number of days of tide data to request
    pub days: Option<u32>,
}

/// Validated tide request.
#[derive(Debug, Clone)]
pub struct TideEnvelope {
    pub coords: Coordinates,
    pub date: String,
    pub days: Option<u32>,
}

impl TideQuery {
    pub fn validate(&self) -> Result<TideEnvelope, GatewayError> {
        let coords = Coordinates::checked(self.lat, self.lon)?;

        let date = match self.date.as_deref() {
            None | Some("today") => "today".to_string(),
            Some(raw) => {
                parse_calendar_date("date", raw)?;
                raw.to_string()
            }
        };

        Ok(TideEnvelope {
            coords,
            date,
            days: self.days,
        })
    }
}

/// Request body for the moon-phase and moon-rise-set endpoints.
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ObserverRequest {
    pub observer: Option<Observer>,
}

/// Observer position and date for astronomy operations.
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct Observer {
    /// Latitude coordinate
    pub latitude: Option<f64>,
    /// Longitude coordinate
    pub longitude: Option<f64>,
    /// Observation date, forwarded to the provider as-is
    pub date: Option<String>,
}

/// Validated observer envelope.
#[derive(Debug, Clone)]
pub struct ObserverEnvelope {
    pub coords: Coordinates,
    pub date: String,
}

impl ObserverRequest {
    pub fn validate(&self) -> Result<ObserverEnvelope, GatewayError> {
        let observer = self
            .observer
            .as_ref()
            .ok_or_else(|| GatewayError::missing_field("observer"))?;

        let lat = observer
            .latitude
            .ok_or_else(|| GatewayError::missing_field("observer.latitude"))?;
        let lon = observer
            .longitude
            .ok_or_else(|| GatewayError::missing_field("observer.longitude"))?;
        let date = observer
            .date
            .clone()
            .ok_or_else(|| GatewayError::missing_field("observer.date"))?;

        let coords = Coordinates::checked(Some(lat), Some(lon))?;

        Ok(ObserverEnvelope { coords, date })
    }
}

/// Query parameters for the positions endpoint.
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct PositionsQuery {
    /// Latitude coordinate
    pub lat: Option<f64>,
    /// Longitude coordinate
    pub lon: Option<f64>,
    /// Start of the date range (YYYY-MM-DD)
    pub from_date: Option<String>,
    /// End of the date range (YYYY-MM-DD)
    pub to_date: Option<String>,
    /// Observer elevation in meters, defaults to 0
    pub elevation: Option<f64>,
    /// Time of day (HH:MM:SS)
    pub time: Option<String>,
}

/// Validated positions request.
#[derive(Debug, Clone)]
pub struct PositionsEnvelope {
    pub coords: Coordinates,
    pub from_date: String,
    pub to_date: String,
    pub elevation: f64,
    pub time: Option<String>,
}

impl PositionsQuery {
    pub fn validate(&self) -> Result<PositionsEnvelope, GatewayError> {
        let coords = Coordinates::checked(self.lat, self.lon)?;
        let from_date = required_calendar_date("from_date", self.from_date.as_deref())?;
        let to_date = required_calendar_date("to_date", self.to_date.as_deref())?;

        Ok(PositionsEnvelope {
            coords,
            from_date,
            to_date,
            elevation: self.elevation.unwrap_or(0.0),
            time: self.time.clone(),
        })
    }
}

fn required_calendar_date(field: &str, value: Option<&str>) -> Result<String, GatewayError> {
    let raw = value.ok_or_else(|| GatewayError::missing_field(field))?;
    parse_calendar_date(field, raw)?;
    Ok(raw.to_string())
}

fn parse_calendar_date(field: &str, raw: &str) -> Result<NaiveDate, GatewayError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        GatewayError::Validation(format!("'{field}' must be a calendar date (YYYY-MM-DD)"))
    })
}
