//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 1323)
//! - `STOREFRONT_DATA_PATH` - Store document location (default: data/store.json)
//! - `STOREFRONT_BASE_URL` - Public URL; an `https://` URL marks the session
//!   cookie `Secure` (default: <http://localhost:1323>)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::db::document::DEFAULT_STORE_PATH;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "1323";
const DEFAULT_BASE_URL: &str = "http://localhost:1323";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
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
    /// Path of the JSON store document
    pub data_path: PathBuf,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the host or port cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// As [`StorefrontConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let or_default =
            |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let host = parse_var(
            "STOREFRONT_HOST",
            &or_default("STOREFRONT_HOST", DEFAULT_HOST),
        )?;
        let port = parse_var(
            "STOREFRONT_PORT",
            &or_default("STOREFRONT_PORT", DEFAULT_PORT),
        )?;
        let data_path = PathBuf::from(or_default("STOREFRONT_DATA_PATH", DEFAULT_STORE_PATH));
        let base_url = or_default("STOREFRONT_BASE_URL", DEFAULT_BASE_URL);

        Ok(Self {
            host,
            port,
            data_path,
            base_url,
            sentry_dsn: var("SENTRY_DSN"),
            sentry_environment: var("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 1323,
            data_path: PathBuf::from(DEFAULT_STORE_PATH),
            base_url: DEFAULT_BASE_URL.to_string(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
