//! Tides endpoint handler.

use crate::{models::TideQuery, services::TideService};
use actix_web::{Error, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// Tides endpoint
///
/// Returns the provider's tide heights and extremes payload unchanged.
#[api_v2_operation(
    summary = "Tides Endpoint",
    description = "Returns tide heights and high/low extremes for the given coordinates, passed through from the provider unchanged. The date defaults to \"today\".",
    tags("Tides"),
    parameters(
        ("lat" = Option<f64>, Query, description = "Latitude coordinate"),
        ("lon" = Option<f64>, Query, description = "Longitude coordinate"),
        ("date" = Option<String>, Query, description = "Calendar date (YYYY-MM-DD) or \"today\""),
        ("days" = Option<u32>, Query, description = "Number of days of tide data"),
    ),
    responses(
        (status = 200, description = "Raw tide payload"),
        (status = 400, description = "Bad Request - Missing or invalid parameters"),
        (status = 500, description = "Internal Server Error - Provider unreachable or not configured")
    )
)]
pub async fn tides(
    query: web::Query<TideQuery>,
    service: web::Data<TideService>,
) -> Result<HttpResponse, Error> {
    let envelope = query.validate()?;
    let payload = service.tides(&envelope).await?;

    Ok(HttpResponse::Ok().json(payload))
}
