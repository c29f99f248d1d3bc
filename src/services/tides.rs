//! WorldTides adapter.
//!
//! The v3 API answers on a single endpoint; empty `heights` and `extremes`
//! parameters act as flags requesting both the height time-series and the
//! high/low tide events. The payload passes through to the client unchanged.

use serde_json::Value;

use crate::{
    config::{ProviderEndpoints, ProviderSecrets},
    models::query::TideEnvelope,
    services::{error::GatewayError, http_client::UpstreamClient},
};

const PROVIDER: &str = "worldtides";

/// WorldTides provider service.
pub struct TideService {
    http: UpstreamClient,
    base_url: String,
    api_key: Option<String>,
}

impl TideService {
    pub fn new(
        secrets: &ProviderSecrets,
        endpoints: &ProviderEndpoints,
        http: UpstreamClient,
    ) -> Self {
        Self {
            http,
            base_url: endpoints.worldtides_base.clone(),
            api_key: secrets.worldtides_api_key.clone(),
        }
    }

    fn key(&self) -> Result<&str, GatewayError> {
        self.api_key
            .as_deref()
            .ok_or(GatewayError::AuthConfig(PROVIDER))
    }

    /// Tide heights and extremes for a coordinate and date.
    pub async fn tides(&self, envelope: &TideEnvelope) -> Result<Value, GatewayError> {
        let url = format!("{}/api/v3", self.base_url);

        let mut params = vec![
            ("lat", envelope.coords.lat.to_string()),
            ("lon", envelope.coords.lon.to_string()),
            ("key", self.key()?.to_string()),
            ("heights", String::new()),
            ("extremes", String::new()),
            ("date", envelope.date.clone()),
        ];
        if let Some(days) = envelope.days {
            params.push(("days", days.to_string()));
        }

        let request = self.http.get(&url).query(&params);
        self.http.execute_json(PROVIDER, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpClientConfig;

    #[test]
    fn missing_key_fails_before_any_call() {
        let http = UpstreamClient::new(&HttpClientConfig::default(), None).unwrap();
        let service = TideService::new(
            &ProviderSecrets::default(),
            &ProviderEndpoints::default(),
            http,
        );

        assert!(matches!(
            service.key(),
            Err(GatewayError::AuthConfig("worldtides"))
        ));
    }
}
