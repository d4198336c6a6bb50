//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ORDERS_API_URL` - Base URL of the orders service (cart, order placement)
//! - `CATALOG_API_URL` - Base URL of the catalog service (products, favorites, recent)
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CATALOG_CACHE_TTL_SECS` - Product catalog cache TTL (default: 300)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (e.g. production, staging)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

const DEFAULT_CATALOG_CACHE_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the orders service
    pub orders_url: Url,
    /// Base URL of the catalog service
    pub catalog_url: Url,
    /// TTL for the cached product catalog, in seconds
    pub catalog_cache_ttl_secs: u64,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let orders_url = get_base_url("ORDERS_API_URL")?;
        let catalog_url = get_base_url("CATALOG_API_URL")?;
        let catalog_cache_ttl_secs = get_env_or_default(
            "CATALOG_CACHE_TTL_SECS",
            &DEFAULT_CATALOG_CACHE_TTL_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOG_CACHE_TTL_SECS".to_string(), e.to_string())
        })?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            orders_url,
            catalog_url,
            catalog_cache_ttl_secs,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a required environment variable and parse it as an HTTP base URL.
fn get_base_url(key: &str) -> Result<Url, ConfigError> {
    let value = get_required_env(key)?;
    parse_base_url(&value).map_err(|reason| ConfigError::InvalidEnvVar(key.to_string(), reason))
}

/// Parse and validate a service base URL.
///
/// The URL must be absolute with an http(s) scheme and a host; a trailing
/// slash is stripped so paths can be appended uniformly.
fn parse_base_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value.trim_end_matches('/')).map_err(|e| e.to_string())?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("URL must have a host".to_string());
    }
    Ok(url)
}
