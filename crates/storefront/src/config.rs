//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STORE_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `STORE_BASE_URL` - Public URL for the store
//!
//! ## Optional
//! - `STORE_HOST` - Bind address (default: 127.0.0.1)
//! - `STORE_PORT` - Listen port (default: 3000)
//! - `STORE_PAGE_SIZE` - Products per catalog page (default: 4)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g., production)
//! - `STORE_LOG_JSON` - Emit JSON logs when set (read by the binary)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Products per catalog page when `STORE_PAGE_SIZE` is not set.
pub const DEFAULT_PAGE_SIZE: u32 = 4;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the store
    pub base_url: String,
    /// Number of products shown per catalog page (always > 0)
    pub page_size: u32,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl StoreConfig {
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

        let database_url = get_database_url("STORE_DATABASE_URL")?;
        let host = get_env_or_default("STORE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STORE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STORE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STORE_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("STORE_BASE_URL")?;
        let page_size = parse_page_size(get_optional_env("STORE_PAGE_SIZE").as_deref())?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            page_size,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the store is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Load only the database URL, for tools that do not serve HTTP.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` if neither `STORE_DATABASE_URL` nor
/// `DATABASE_URL` is set.
pub fn database_url_from_env() -> Result<SecretString, ConfigError> {
    let _ = dotenvy::dotenv();
    get_database_url("STORE_DATABASE_URL")
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse the catalog page size, rejecting zero.
fn parse_page_size(value: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = value else {
        return Ok(DEFAULT_PAGE_SIZE);
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar(
            "STORE_PAGE_SIZE".to_string(),
            "must be greater than zero".to_string(),
        )),
        Ok(size) => Ok(size),
        Err(e) => Err(ConfigError::InvalidEnvVar(
            "STORE_PAGE_SIZE".to_string(),
            e.to_string(),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> StoreConfig {
        StoreConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    #[test]
    fn test_page_size_default() {
        assert_eq!(parse_page_size(None).unwrap(), 4);
    }

    #[test]
    fn test_page_size_parsed() {
        assert_eq!(parse_page_size(Some(" 12 ")).unwrap(), 12);
    }

    #[test]
    fn test_page_size_zero_rejected() {
        let err = parse_page_size(Some("0")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STORE_PAGE_SIZE"));
    }

    #[test]
    fn test_page_size_garbage_rejected() {
        assert!(parse_page_size(Some("lots")).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let addr = config().socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure() {
        let mut config = config();
        assert!(!config.is_secure());
        config.base_url = "https://store.example.com".to_string();
        assert!(config.is_secure());
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let mut config = config();
        config.database_url = SecretString::from("postgres://user:hunter2@db/store");
        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("hunter2"));
    }
}
