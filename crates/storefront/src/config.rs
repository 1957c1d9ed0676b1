//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit local development.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_DATA_DIR` - Directory holding the persisted cart (default: data)
//! - `STOREFRONT_CATALOG_PATH` - Catalog JSON file (default: `<data_dir>/catalog.json`)
//! - `STOREFRONT_STATIC_DIR` - Static asset directory (default: crates/storefront/static)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

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
    /// Directory holding persisted state (the cart file)
    pub data_dir: PathBuf,
    /// Path to the catalog JSON file
    pub catalog_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
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

        let data_dir = PathBuf::from(get_env_or_default("STOREFRONT_DATA_DIR", "data"));
        let catalog_path = get_optional_env("STOREFRONT_CATALOG_PATH")
            .map_or_else(|| data_dir.join("catalog.json"), PathBuf::from);
        let static_dir = PathBuf::from(get_env_or_default(
            "STOREFRONT_STATIC_DIR",
            "crates/storefront/static",
        ));

        Ok(Self {
            host,
            port,
            data_dir,
            catalog_path,
            static_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of the persisted cart file.
    #[must_use]
    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.join("cart.json")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_with(host: &str, port: u16, data_dir: &str) -> StorefrontConfig {
        StorefrontConfig {
            host: host.parse().unwrap(),
            port,
            data_dir: PathBuf::from(data_dir),
            catalog_path: PathBuf::from(data_dir).join("catalog.json"),
            static_dir: PathBuf::from("crates/storefront/static"),
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = config_with("127.0.0.1", 3000, "data");
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_cart_path_under_data_dir() {
        let config = config_with("0.0.0.0", 8080, "/var/lib/roastline");
        assert_eq!(
            config.cart_path(),
            PathBuf::from("/var/lib/roastline/cart.json")
        );
    }

    #[test]
    fn test_invalid_host_error_display() {
        let err = ConfigError::InvalidEnvVar(
            "STOREFRONT_HOST".to_string(),
            "invalid IP address syntax".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Invalid environment variable STOREFRONT_HOST: invalid IP address syntax"
        );
    }
}
