//! OpenAPI specification generation and app factory.

use crate::{
    config::{HttpClientConfig, MetricsConfig, ProviderEndpoints, ProviderSecrets},
    handlers::{
        air_pollution, current_weather, forecast, get_metrics, health, moon_phase, moon_rise_set,
        positions, tides, version,
    },
    services::{AppMetrics, AstronomyService, GatewayError, TideService, UpstreamClient, WeatherService},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Shorecast API".into(),
            version: "1.0.0".into(),
            description: Some(
                "Aggregation gateway for marine and sky conditions.\n\n\
                The gateway fronts three upstream providers behind one stable contract:\n\
                - OpenWeatherMap for current weather, daily forecast and air quality\n\
                - WorldTides for tide heights and extremes\n\
                - AstronomyAPI for moon phase, rise/set and body positions\n\
                \n\
                Provider credentials are read from the environment (`OPENWEATHER_API_KEY`,\n\
                `TIDES_API_KEY`, `ASTRO_APP_ID`/`ASTRO_APP_SECRET`) and never leave the\n\
                server. Inbound parameters are validated before any upstream call; failures\n\
                are reported as `{\"error\": ..., \"kind\": ...}` with a 400 for validation\n\
                errors, the upstream status for provider errors, and 500 for network or\n\
                configuration problems."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates a basic app with shared configuration
///
/// This factory function creates a pre-configured Actix Web application with:
/// - The gateway endpoints (weather, forecast, air-pollution, tides,
///   moon-phase, moon-rise-set, positions)
/// - Health, version and metrics endpoints
/// - OpenAPI specification
///
/// This can be used both for testing and as a base for the main application.
pub fn create_base_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let secrets = ProviderSecrets::from_env();
    let endpoints = ProviderEndpoints::from_env();
    let http_config = HttpClientConfig::from_env();
    let metrics_config = MetricsConfig::from_env();
    let metrics = AppMetrics::new().expect("Failed to create metrics");
    let http = UpstreamClient::new(&http_config, Some(metrics.clone()))
        .expect("Failed to create upstream HTTP client");

    let weather = WeatherService::new(&secrets, &endpoints, http.clone());
    let tide = TideService::new(&secrets, &endpoints, http.clone());
    let astronomy = AstronomyService::new(&secrets, &endpoints, http);

    App::new()
        .wrap_api_with_spec(create_openapi_spec())
        // Deserialization failures get the same envelope as validation ones.
        .app_data(
            actix_web::web::QueryConfig::default()
                .error_handler(|err, _| GatewayError::Validation(err.to_string()).into()),
        )
        .app_data(
            actix_web::web::JsonConfig::default()
                .error_handler(|err, _| GatewayError::Validation(err.to_string()).into()),
        )
        .app_data(web::Data::new(metrics_config))
        .app_data(web::Data::new(metrics))
        .app_data(web::Data::new(weather))
        .app_data(web::Data::new(tide))
        .app_data(web::Data::new(astronomy))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .service(web::resource("/weather").route(web::get().to(current_weather)))
        .service(web::resource("/forecast").route(web::get().to(forecast)))
        .service(web::resource("/air-pollution").route(web::get().to(air_pollution)))
        .service(web::resource("/tides").route(web::get().to(tides)))
        .service(web::resource("/moon-phase").route(web::post().to(moon_phase)))
        .service(web::resource("/moon-rise-set").route(web::post().to(moon_rise_set)))
        .service(web::resource("/positions").route(web::get().to(positions)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
