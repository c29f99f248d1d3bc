//! Provider credential and endpoint configuration.
//!
//! Both structures are built once at startup and injected into the provider
//! services; nothing here mutates after load.

use std::env;

use tracing::warn;
use url::Url;

use crate::services::error::GatewayError;

const OPENWEATHER_DEFAULT: &str = "https://api.openweathermap.org";
const WORLDTIDES_DEFAULT: &str = "https://www.worldtides.info";
const ASTRONOMY_DEFAULT: &str = "https://api.astronomyapi.com";

/// Per-provider secrets.
///
/// Empty values are treated as absent so a blank `TIDES_API_KEY=` in the
/// environment does not masquerade as a working credential. No `Debug`
/// derive: these values must never end up in logs.
#[derive(Clone, Default)]
pub struct ProviderSecrets {
    pub openweather_api_key: Option<String>,
    pub worldtides_api_key: Option<String>,
    pub astronomy_app_id: Option<String>,
    pub astronomy_app_secret: Option<String>,
}

impl ProviderSecrets {
    /// Load credentials from environment variables.
    pub fn from_env() -> Self {
        Self {
            openweather_api_key: non_empty(env::var("OPENWEATHER_API_KEY").ok()),
            worldtides_api_key: non_empty(env::var("TIDES_API_KEY").ok()),
            astronomy_app_id: non_empty(env::var("ASTRO_APP_ID").ok()),
            astronomy_app_secret: non_empty(env::var("ASTRO_APP_SECRET").ok()),
        }
    }

    pub fn openweather_key(&self) -> Result<&str, GatewayError> {
        self.openweather_api_key
            .as_deref()
            .ok_or(GatewayError::AuthConfig("openweather"))
    }

    pub fn worldtides_key(&self) -> Result<&str, GatewayError> {
        self.worldtides_api_key
            .as_deref()
            .ok_or(GatewayError::AuthConfig("worldtides"))
    }

    /// The AstronomyAPI application (id, secret) pair.
    pub fn astronomy_pair(&self) -> Result<(&str, &str), GatewayError> {
        match (
            self.astronomy_app_id.as_deref(),
            self.astronomy_app_secret.as_deref(),
        ) {
            (Some(id), Some(secret)) => Ok((id, secret)),
            _ => Err(GatewayError::AuthConfig("astronomy")),
        }
    }

    /// Log which providers are unusable. Called once at startup; the gateway
    /// still serves whichever providers are configured.
    pub fn log_startup_state(&self) {
        if self.openweather_api_key.is_none() {
            warn!(
                "OPENWEATHER_API_KEY is not set; /weather, /forecast and /air-pollution will return 500"
            );
        }
        if self.worldtides_api_key.is_none() {
            warn!("TIDES_API_KEY is not set; /tides will return 500");
        }
        if self.astronomy_app_id.is_none() || self.astronomy_app_secret.is_none() {
            warn!(
                "ASTRO_APP_ID/ASTRO_APP_SECRET are not set; /moon-phase, /moon-rise-set and /positions will return 500"
            );
        }
    }
}

/// Per-provider base URLs, overridable for tests and staging.
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub openweather_base: String,
    pub worldtides_base: String,
    pub astronomy_base: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            openweather_base: OPENWEATHER_DEFAULT.to_string(),
            worldtides_base: WORLDTIDES_DEFAULT.to_string(),
            astronomy_base: ASTRONOMY_DEFAULT.to_string(),
        }
    }
}

impl ProviderEndpoints {
    /// Load base URLs from environment variables, falling back to the
    /// production endpoints.
    pub fn from_env() -> Self {
        Self {
            openweather_base: base_url_from_env("OPENWEATHER_BASE_URL", OPENWEATHER_DEFAULT),
            worldtides_base: base_url_from_env("WORLDTIDES_BASE_URL", WORLDTIDES_DEFAULT),
            astronomy_base: base_url_from_env("ASTRONOMY_BASE_URL", ASTRONOMY_DEFAULT),
        }
    }
}

fn base_url_from_env(variable: &str, default: &str) -> String {
    match env::var(variable) {
        Ok(value) if Url::parse(&value).is_ok() => value.trim_end_matches('/').to_string(),
        Ok(_) => {
            warn!(variable, "ignoring malformed base URL override");
            default.to_string()
        }
        Err(_) => default.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_an_auth_config_error() {
        let secrets = ProviderSecrets::default();

        assert!(matches!(
            secrets.openweather_key(),
            Err(GatewayError::AuthConfig("openweather"))
        ));
        assert!(matches!(
            secrets.worldtides_key(),
            Err(GatewayError::AuthConfig("worldtides"))
        ));
        assert!(matches!(
            secrets.astronomy_pair(),
            Err(GatewayError::AuthConfig("astronomy"))
        ));
    }

    #[test]
    fn empty_env_value_counts_as_absent() {
        unsafe {
            env::set_var("TIDES_API_KEY", "   ");
        }

        let secrets = ProviderSecrets::from_env();
        assert!(secrets.worldtides_api_key.is_none());

        unsafe {
            env::remove_var("TIDES_API_KEY");
        }
    }

    #[test]
    fn astronomy_pair_requires_both_halves() {
        let secrets = ProviderSecrets {
            astronomy_app_id: Some("app-id".to_string()),
            ..Default::default()
        };

        assert!(secrets.astronomy_pair().is_err());
    }

    #[test]
    fn configured_key_is_returned() {
        let secrets = ProviderSecrets {
            openweather_api_key: Some("KEY".to_string()),
            ..Default::default()
        };

        assert_eq!(secrets.openweather_key().unwrap(), "KEY");
    }

    #[test]
    fn malformed_base_url_override_falls_back() {
        unsafe {
            env::set_var("WORLDTIDES_BASE_URL", "not a url");
        }

        let endpoints = ProviderEndpoints::from_env();
        assert_eq!(endpoints.worldtides_base, WORLDTIDES_DEFAULT);

        unsafe {
            env::remove_var("WORLDTIDES_BASE_URL");
        }
    }

    #[test]
    fn base_url_override_is_trimmed() {
        unsafe {
            env::set_var("ASTRONOMY_BASE_URL", "http://localhost:9000/");
        }

        let endpoints = ProviderEndpoints::from_env();
        assert_eq!(endpoints.astronomy_base, "http://localhost:9000");

        unsafe {
            env::remove_var("ASTRONOMY_BASE_URL");
        }
    }
}
