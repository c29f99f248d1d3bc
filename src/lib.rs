//! Shorecast API - an aggregation gateway for marine and sky conditions
//!
//! The gateway fronts three upstream providers behind one stable contract:
//! - OpenWeatherMap for current weather, daily forecast and air quality
//! - WorldTides for tide heights and extremes
//! - AstronomyAPI for moon phase, rise/set and body positions
//!
//! Inbound parameters are validated before any upstream call, provider
//! credentials stay server-side, and upstream failures are translated into
//! a uniform `{"error": ...}` envelope.
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Request/response models and envelope validation
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `services/` - Provider adapters, upstream client, metrics, errors
//! - `config/` - Configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use shorecast_api::create_base_app;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let app = create_base_app();
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

// Re-export commonly used types and functions for convenience
pub use config::{HttpClientConfig, MetricsConfig, ProviderEndpoints, ProviderSecrets};
pub use handlers::{
    air_pollution, create_base_app, create_openapi_spec, current_weather, forecast, get_metrics,
    health, moon_phase, moon_rise_set, positions, tides, version,
};
pub use models::{
    ConditionSummary, CoordsQuery, Coordinates, CurrentConditions, ForecastEntry, ForecastList,
    HealthResponse, Observer, ObserverRequest, PositionsQuery, TideQuery, VersionResponse,
};
pub use services::{
    AppMetrics, AstronomyService, GatewayError, TideService, UpstreamClient, WeatherService,
};
