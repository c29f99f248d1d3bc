//! Astronomy endpoint handlers.

use crate::{
    models::{ObserverRequest, PositionsQuery},
    services::AstronomyService,
};
use actix_web::{Error, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// Moon phase endpoint
///
/// Returns the provider's moon phase payload unchanged.
#[api_v2_operation(
    summary = "Moon Phase Endpoint",
    description = "Returns the moon phase for an observer (latitude, longitude, date), passed through from the provider unchanged.",
    tags("Astronomy"),
    responses(
        (status = 200, description = "Raw moon phase payload"),
        (status = 400, description = "Bad Request - Incomplete observer object"),
        (status = 500, description = "Internal Server Error - Provider unreachable or not configured")
    )
)]
pub async fn moon_phase(
    body: web::Json<ObserverRequest>,
    service: web::Data<AstronomyService>,
) -> Result<HttpResponse, Error> {
    let observer = body.validate()?;
    let payload = service.moon_phase(&observer).await?;

    Ok(HttpResponse::Ok().json(payload))
}

/// Moon rise/set endpoint
///
/// Returns the provider's body positions payload unchanged.
#[api_v2_operation(
    summary = "Moon Rise/Set Endpoint",
    description = "Returns moon rise and set data for an observer (latitude, longitude, date), passed through from the provider unchanged.",
    tags("Astronomy"),
    responses(
        (status = 200, description = "Raw rise/set payload"),
        (status = 400, description = "Bad Request - Incomplete observer object"),
        (status = 500, description = "Internal Server Error - Provider unreachable or not configured")
    )
)]
pub async fn moon_rise_set(
    body: web::Json<ObserverRequest>,
    service: web::Data<AstronomyService>,
) -> Result<HttpResponse, Error> {
    let observer = body.validate()?;
    let payload = service.moon_rise_set(&observer).await?;

    Ok(HttpResponse::Ok().json(payload))
}

/// Body positions endpoint
///
/// Returns the provider's positions payload unchanged.
#[api_v2_operation(
    summary = "Body Positions Endpoint",
    description = "Returns astronomical body positions over a date range for the given coordinates, passed through from the provider unchanged.",
    tags("Astronomy"),
    parameters(
        ("lat" = Option<f64>, Query, description = "Latitude coordinate"),
        ("lon" = Option<f64>, Query, description = "Longitude coordinate"),
        ("from_date" = Option<String>, Query, description = "Start of the date range (YYYY-MM-DD)"),
        ("to_date" = Option<String>, Query, description = "End of the date range (YYYY-MM-DD)"),
        ("elevation" = Option<f64>, Query, description = "Observer elevation in meters"),
        ("time" = Option<String>, Query, description = "Time of day (HH:MM:SS)"),
    ),
    responses(
        (status = 200, description = "Raw positions payload"),
        (status = 400, description = "Bad Request - Missing or invalid parameters"),
        (status = 500, description = "Internal Server Error - Provider unreachable or not configured")
    )
)]
pub async fn positions(
    query: web::Query<PositionsQuery>,
    service: web::Data<AstronomyService>,
) -> Result<HttpResponse, Error> {
    let envelope = query.validate()?;
    let payload = service.positions(&envelope).await?;

    Ok(HttpResponse::Ok().json(payload))
}
