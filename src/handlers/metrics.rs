//! Metrics endpoint handler.

use crate::{config::MetricsConfig, services::AppMetrics};
use actix_web::{Error, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// Prometheus metrics endpoint
///
/// Returns Prometheus-formatted metrics covering upstream provider calls
/// and application info. This endpoint is typically scraped by monitoring
/// systems.
#[api_v2_operation(
    summary = "Prometheus Metrics Endpoint",
    description = "Returns Prometheus-formatted metrics for upstream provider calls and application info.",
    tags("Metrics"),
    responses(
        (status = 200, description = "Prometheus metrics in text format"),
        (status = 503, description = "Metrics collection disabled")
    )
)]
pub async fn get_metrics(
    config: web::Data<MetricsConfig>,
    metrics: web::Data<AppMetrics>,
) -> Result<HttpResponse, Error> {
    if !config.enabled {
        return Ok(HttpResponse::ServiceUnavailable()
            .content_type("text/plain")
            .body("Metrics collection is disabled"));
    }

    match metrics.render() {
        Ok(metrics_output) => Ok(HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4; charset=utf-8")
            .body(metrics_output)),
        Err(e) => Err(actix_web::error::ErrorInternalServerError(format!(
            "Failed to render metrics: {e}"
        ))),
    }
}
