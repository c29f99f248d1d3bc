//! Weather, forecast and air-pollution endpoint handlers.

use crate::{models::CoordsQuery, services::WeatherService};
use actix_web::{Error, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// Current weather endpoint
///
/// Returns normalized current conditions for a coordinate pair.
#[api_v2_operation(
    summary = "Current Weather Endpoint",
    description = "Returns normalized current conditions (condition list, temperature, humidity, wind, precipitation, sunrise/sunset) for the given coordinates.",
    tags("Weather"),
    parameters(
        ("lat" = Option<f64>, Query, description = "Latitude coordinate"),
        ("lon" = Option<f64>, Query, description = "Longitude coordinate"),
    ),
    responses(
        (status = 200, description = "Normalized current conditions"),
        (status = 400, description = "Bad Request - Missing or invalid coordinates"),
        (status = 500, description = "Internal Server Error - Provider unreachable or not configured")
    )
)]
pub async fn current_weather(
    query: web::Query<CoordsQuery>,
    service: web::Data<WeatherService>,
) -> Result<HttpResponse, Error> {
    let coords = query.validate()?;
    let conditions = service.current(&coords).await?;

    Ok(HttpResponse::Ok().json(conditions))
}

/// Daily forecast endpoint
///
/// Returns up to 8 days of max/min temperatures for a coordinate pair.
#[api_v2_operation(
    summary = "Daily Forecast Endpoint",
    description = "Returns a daily forecast list (at most 8 entries, max/min temperature per day) for the given coordinates.",
    tags("Weather"),
    parameters(
        ("lat" = Option<f64>, Query, description = "Latitude coordinate"),
        ("lon" = Option<f64>, Query, description = "Longitude coordinate"),
    ),
    responses(
        (status = 200, description = "Normalized forecast list"),
        (status = 400, description = "Bad Request - Missing or invalid coordinates"),
        (status = 500, description = "Internal Server Error - Provider unreachable or not configured")
    )
)]
pub async fn forecast(
    query: web::Query<CoordsQuery>,
    service: web::Data<WeatherService>,
) -> Result<HttpResponse, Error> {
    let coords = query.validate()?;
    let list = service.forecast(&coords).await?;

    Ok(HttpResponse::Ok().json(list))
}

/// Air quality endpoint
///
/// Returns the provider's air pollution payload unchanged.
#[api_v2_operation(
    summary = "Air Pollution Endpoint",
    description = "Returns the upstream air pollution payload unchanged for the given coordinates.",
    tags("Weather"),
    parameters(
        ("lat" = Option<f64>, Query, description = "Latitude coordinate"),
        ("lon" = Option<f64>, Query, description = "Longitude coordinate"),
    ),
    responses(
        (status = 200, description = "Raw air pollution payload"),
        (status = 400, description = "Bad Request - Missing or invalid coordinates"),
        (status = 500, description = "Internal Server Error - Provider unreachable or not configured")
    )
)]
pub async fn air_pollution(
    query: web::Query<CoordsQuery>,
    service: web::Data<WeatherService>,
) -> Result<HttpResponse, Error> {
    let coords = query.validate()?;
    let payload = service.air_pollution(&coords).await?;

    Ok(HttpResponse::Ok().json(payload))
}
