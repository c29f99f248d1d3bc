//! Gateway error taxonomy and the client-facing error envelope.
//!
//! The actix handlers are the only place these errors are rendered;
//! everything below them propagates with `?`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Failure classification for a gateway operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Required inbound field missing or malformed. Never retried.
    #[error("{0}")]
    Validation(String),

    /// Provider credential absent or empty.
    #[error("missing or empty credential for provider '{0}'")]
    AuthConfig(&'static str),

    /// Upstream answered with a non-2xx status.
    #[error("{provider} returned status {status}")]
    Upstream { provider: &'static str, status: u16 },

    /// Transport-level failure reaching the upstream (timeout, DNS,
    /// connection reset) or an undecodable response body.
    #[error("{0}")]
    Network(String),
}

impl GatewayError {
    /// Stable tag used in the error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Validation(_) => "validation",
            GatewayError::AuthConfig(_) => "auth_config",
            GatewayError::Upstream { .. } => "upstream",
            GatewayError::Network(_) => "network",
        }
    }

    pub fn missing_field(name: &str) -> Self {
        GatewayError::Validation(format!("missing required field '{name}'"))
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::AuthConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Pass upstream 4xx/5xx through unchanged; anything else
            // collapses to 500.
            GatewayError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            GatewayError::Network(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "error": self.to_string(),
            "kind": self.kind(),
        });
        if let GatewayError::Upstream { status, .. } = self {
            body["upstream_status"] = json!(status);
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = GatewayError::missing_field("lat");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "validation");
        assert!(err.to_string().contains("lat"));
    }

    #[test]
    fn auth_config_maps_to_500() {
        let err = GatewayError::AuthConfig("worldtides");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "auth_config");
    }

    #[test]
    fn upstream_error_status_passes_through() {
        let err = GatewayError::Upstream {
            provider: "astronomy",
            status: 401,
        };
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn upstream_non_error_status_collapses_to_500() {
        let err = GatewayError::Upstream {
            provider: "openweather",
            status: 302,
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn network_maps_to_500() {
        let err = GatewayError::Network("connection reset".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "network");
    }
}
