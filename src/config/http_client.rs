//! Upstream HTTP client configuration.

use std::env;

/// Timeout configuration for outbound provider calls.
///
/// There is deliberately no retry configuration: upstream calls are made
/// exactly once and failures surface to the client immediately.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Connection timeout (in seconds)
    pub connect_timeout_seconds: u64,

    /// Total request timeout (in seconds)
    pub request_timeout_seconds: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: 3,
            request_timeout_seconds: 10,
        }
    }
}

impl HttpClientConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let connect_timeout_seconds = env::var("UPSTREAM_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let request_timeout_seconds = env::var("UPSTREAM_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            connect_timeout_seconds,
            request_timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_bounded() {
        let config = HttpClientConfig::default();
        assert!(config.connect_timeout_seconds > 0);
        assert!(config.request_timeout_seconds >= config.connect_timeout_seconds);
    }

    // Single test; parallel tests must not race on the same variables.
    #[test]
    fn from_env_overrides_and_falls_back() {
        unsafe {
            env::set_var("UPSTREAM_CONNECT_TIMEOUT", "7");
            env::set_var("UPSTREAM_REQUEST_TIMEOUT", "21");
        }

        let config = HttpClientConfig::from_env();
        assert_eq!(config.connect_timeout_seconds, 7);
        assert_eq!(config.request_timeout_seconds, 21);

        unsafe {
            env::set_var("UPSTREAM_CONNECT_TIMEOUT", "not-a-number");
        }

        let config = HttpClientConfig::from_env();
        assert_eq!(config.connect_timeout_seconds, 3);
        assert_eq!(config.request_timeout_seconds, 21);

        unsafe {
            env::remove_var("UPSTREAM_CONNECT_TIMEOUT");
            env::remove_var("UPSTREAM_REQUEST_TIMEOUT");
        }
    }
}
