//! Bounded-timeout HTTP client shared by the provider adapters.

use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::HttpClientConfig,
    services::{error::GatewayError, metrics::AppMetrics},
};

/// Outbound HTTP client wrapper.
///
/// Classifies every upstream exchange into the gateway error taxonomy and
/// records per-provider metrics. Requests are made exactly once; there is no
/// retry path. Query strings carry provider credentials, so logging sticks
/// to host-relative paths.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    metrics: Option<AppMetrics>,
}

impl UpstreamClient {
    /// Create a client with the configured connect and request timeouts.
    pub fn new(
        config: &HttpClientConfig,
        metrics: Option<AppMetrics>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self { client, metrics })
    }

    /// Start a GET request against an upstream URL.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }

    /// Start a POST request against an upstream URL.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url)
    }

    /// Execute a request and decode the JSON body.
    ///
    /// Non-2xx answers become `Upstream { status }`; transport failures,
    /// timeouts and undecodable bodies become `Network`.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        provider: &'static str,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let started = Instant::now();
        let request = request.build().map_err(|e| {
            GatewayError::Network(format!("failed to build request for {provider}: {e}"))
        })?;
        let path = request.url().path().to_string();

        let (outcome, result) = match self.client.execute(request).await {
            Err(e) if e.is_timeout() => (
                "timeout",
                Err(GatewayError::Network(format!(
                    "request to {provider} timed out"
                ))),
            ),
            Err(e) => (
                "network_error",
                Err(GatewayError::Network(format!(
                    "failed to reach {provider}: {e}"
                ))),
            ),
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    match response.json::<T>().await {
                        Ok(decoded) => ("success", Ok(decoded)),
                        Err(e) => (
                            "decode_error",
                            Err(GatewayError::Network(format!(
                                "invalid JSON from {provider}: {e}"
                            ))),
                        ),
                    }
                } else {
                    let body = response.text().await.unwrap_or_default();
                    warn!(
                        provider,
                        status = status.as_u16(),
                        path = %path,
                        body = %truncate_body(&body),
                        "upstream returned error status"
                    );
                    (
                        "upstream_error",
                        Err(GatewayError::Upstream {
                            provider,
                            status: status.as_u16(),
                        }),
                    )
                }
            }
        };

        if let Some(metrics) = &self.metrics {
            metrics.record_upstream(provider, outcome, started.elapsed());
        }
        debug!(
            provider,
            outcome,
            path = %path,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "upstream call finished"
        );

        result
    }
}

/// Keep logged upstream bodies short; they are diagnostics, not payload.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() <= MAX {
        body.to_string()
    } else {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    }
}
