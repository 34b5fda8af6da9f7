//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CATALOG_SHEET_URL` - HTTP endpoint serving the catalog rows as a JSON array
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `WHATSAPP_PHONE` - Order recipient phone token (default: 573137873766)
//! - `PLACEHOLDER_IMAGE_URL` - Substitute image for rows without one
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// The number the store has published historically; override per
/// deployment with `WHATSAPP_PHONE`.
const DEFAULT_WHATSAPP_PHONE: &str = "573137873766";

/// Default substitute for rows without an `imagen` cell.
const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300?text=LightGel";

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
    /// Endpoint serving the catalog spreadsheet as a JSON array
    pub catalog_sheet_url: Url,
    /// Recipient token for the outgoing order link (digits, no `+`)
    pub whatsapp_phone: String,
    /// Image substituted for rows without one
    pub placeholder_image_url: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g., production, staging)
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
        let catalog_sheet_url =
            parse_http_url(&get_required_env("CATALOG_SHEET_URL")?, "CATALOG_SHEET_URL")?;
        let whatsapp_phone = get_env_or_default("WHATSAPP_PHONE", DEFAULT_WHATSAPP_PHONE);
        let placeholder_image_url =
            get_env_or_default("PLACEHOLDER_IMAGE_URL", DEFAULT_PLACEHOLDER_IMAGE);
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            catalog_sheet_url,
            whatsapp_phone,
            placeholder_image_url,
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

/// Parse and validate an http(s) endpoint URL.
fn parse_http_url(value: &str, var_name: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must be an http(s) URL, got scheme '{}'", url.scheme()),
        ));
    }

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_http_url_accepts_http_and_https() {
        assert!(parse_http_url("https://sheetdb.io/api/v1/abc123", "TEST").is_ok());
        assert!(parse_http_url("http://localhost:8080/rows", "TEST").is_ok());
    }

    #[test]
    fn test_parse_http_url_rejects_other_schemes() {
        let err = parse_http_url("ftp://example.com/rows", "TEST").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_parse_http_url_rejects_garbage() {
        assert!(parse_http_url("not a url", "TEST").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            catalog_sheet_url: Url::parse("https://sheetdb.io/api/v1/abc123").unwrap(),
            whatsapp_phone: DEFAULT_WHATSAPP_PHONE.to_string(),
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("CATALOG_SHEET_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: CATALOG_SHEET_URL"
        );
    }
}
