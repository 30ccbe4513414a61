//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_API_URL` - Base URL of the REST API (default: `http://127.0.0.1:4000/api/`)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: `http://127.0.0.1:3000`)
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_REQUEST_TIMEOUT_SECS` - Per-request API timeout (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://127.0.0.1:4000/api/";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// REST API base URL, always ending in `/`
    pub api_url: Url,
    /// Public base URL for the storefront
    pub base_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Timeout applied to every API request
    pub request_timeout: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. production, staging)
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api_url = parse_api_url(&get("STOREFRONT_API_URL", DEFAULT_API_URL))?;

        let host = get("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;

        let port = get("STOREFRONT_PORT", "3000").parse::<u16>().map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
        })?;

        let timeout_secs = get("STOREFRONT_REQUEST_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "STOREFRONT_REQUEST_TIMEOUT_SECS".to_string(),
                    e.to_string(),
                )
            })?;

        Ok(Self {
            api_url,
            base_url: get("STOREFRONT_BASE_URL", "http://127.0.0.1:3000"),
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether session cookies should carry the `Secure` flag.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Parse the API base URL, appending the trailing slash `Url::join` needs.
fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized)
        .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_API_URL".to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api_url.as_str(), "http://127.0.0.1:4000/api/");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(!config.secure_cookies());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_api_url_gets_trailing_slash() {
        let config = load(&[("STOREFRONT_API_URL", "http://api.internal:4000/api")]).unwrap();
        assert_eq!(config.api_url.as_str(), "http://api.internal:4000/api/");
        assert_eq!(
            config.api_url.join("products").unwrap().as_str(),
            "http://api.internal:4000/api/products"
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            load(&[("STOREFRONT_PORT", "http")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "STOREFRONT_PORT"
        ));
        assert!(load(&[("STOREFRONT_API_URL", "not a url")]).is_err());
        assert!(load(&[("STOREFRONT_REQUEST_TIMEOUT_SECS", "-1")]).is_err());
    }

    #[test]
    fn test_https_base_url_enables_secure_cookies() {
        let config = load(&[("STOREFRONT_BASE_URL", "https://solemate.shop")]).unwrap();
        assert!(config.secure_cookies());
    }
}
