//! AstronomyAPI adapter.
//!
//! Every call authenticates with HTTP Basic credentials derived from the
//! application (id, secret) pair. Observer-driven operations POST a derived
//! payload to the bodies endpoints; the positions operation uses the GET
//! variant with query parameters. All payloads pass through unchanged.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::AUTHORIZATION;
use serde_json::{Value, json};

use crate::{
    config::{ProviderEndpoints, ProviderSecrets},
    models::query::{ObserverEnvelope, PositionsEnvelope},
    services::{error::GatewayError, http_client::UpstreamClient},
};

const PROVIDER: &str = "astronomy";

/// Bodies endpoints reached with observer-derived parameters.
#[derive(Debug, Clone, Copy)]
enum BodiesEndpoint {
    Phase,
    Positions,
}

impl BodiesEndpoint {
    fn path(self) -> &'static str {
        match self {
            BodiesEndpoint::Phase => "/api/v2/bodies/phase",
            BodiesEndpoint::Positions => "/api/v2/bodies/positions",
        }
    }
}

/// AstronomyAPI provider service.
pub struct AstronomyService {
    http: UpstreamClient,
    base_url: String,
    app_id: Option<String>,
    app_secret: Option<String>,
}

impl AstronomyService {
    pub fn new(
        secrets: &ProviderSecrets,
        endpoints: &ProviderEndpoints,
        http: UpstreamClient,
    ) -> Self {
        Self {
            http,
            base_url: endpoints.astronomy_base.clone(),
            app_id: secrets.astronomy_app_id.clone(),
            app_secret: secrets.astronomy_app_secret.clone(),
        }
    }

    /// `Basic <base64(id:secret)>`, computed per call and never logged.
    fn auth_header(&self) -> Result<String, GatewayError> {
        let (id, secret) = match (self.app_id.as_deref(), self.app_secret.as_deref()) {
            (Some(id), Some(secret)) => (id, secret),
            _ => return Err(GatewayError::AuthConfig(PROVIDER)),
        };

        let token = BASE64.encode(format!("{id}:{secret}"));
        Ok(format!("Basic {token}"))
    }

    async fn post_bodies(
        &self,
        endpoint: BodiesEndpoint,
        payload: Value,
    ) -> Result<Value, GatewayError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let request = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.auth_header()?)
            .json(&payload);

        self.http.execute_json(PROVIDER, request).await
    }

    /// Moon phase for an observer.
    pub async fn moon_phase(&self, observer: &ObserverEnvelope) -> Result<Value, GatewayError> {
        let payload = json!({
            "observedAt": observer.date,
            "latitude": observer.coords.lat,
            "longitude": observer.coords.lon,
            "format": "JSON",
        });

        self.post_bodies(BodiesEndpoint::Phase, payload).await
    }

    /// Moon rise and set times for an observer.
    pub async fn moon_rise_set(&self, observer: &ObserverEnvelope) -> Result<Value, GatewayError> {
        let payload = json!({
            "observedAt": observer.date,
            "latitude": observer.coords.lat,
            "longitude": observer.coords.lon,
        });

        self.post_bodies(BodiesEndpoint::Positions, payload).await
    }

    /// Body positions over a date range.
    pub async fn positions(&self, envelope: &PositionsEnvelope) -> Result<Value, GatewayError> {
        let url = format!("{}{}", self.base_url, BodiesEndpoint::Positions.path());

        let mut params = vec![
            ("latitude", envelope.coords.lat.to_string()),
            ("longitude", envelope.coords.lon.to_string()),
            ("elevation", envelope.elevation.to_string()),
            ("from_date", envelope.from_date.clone()),
            ("to_date", envelope.to_date.clone()),
        ];
        if let Some(time) = &envelope.time {
            params.push(("time", time.clone()));
        }

        let request = self
            .http
            .get(&url)
            .query(&params)
            .header(AUTHORIZATION, self.auth_header()?);

        self.http.execute_json(PROVIDER, request).await
    }
}
