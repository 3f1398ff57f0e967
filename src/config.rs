//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//! 1. Environment variables (prefix: USERSVC_)
//! 2. Current working directory: ./config.toml
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// SurrealDB configuration
    pub database: SurrealDbConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// SurrealDB connection configuration
///
/// The URL scheme selects the protocol at runtime: `ws://` / `wss://` for
/// WebSocket, `http://` / `https://` for HTTP, `mem://` for the in-memory
/// engine used in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurrealDbConfig {
    /// Database connection URL
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Namespace to select after connecting
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Database to select after connecting
    #[serde(default = "default_database")]
    pub database: String,

    /// Root username (authentication is skipped when absent)
    #[serde(default)]
    pub username: Option<String>,

    /// Root password
    #[serde(default)]
    pub password: Option<String>,

    /// Maximum retry attempts for establishing the connection
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retry attempts in seconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay_secs: u64,
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_database_url() -> String {
    "ws://127.0.0.1:8000".to_string()
}

fn default_namespace() -> String {
    "app".to_string()
}

fn default_database() -> String {
    "users".to_string()
}

fn default_max_retries() -> u32 {
    5
}

fn default_retry_delay() -> u64 {
    2
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Reads `./config.toml` when present; environment variables with the
    /// `USERSVC_` prefix override file values (e.g. `USERSVC_SERVICE_PORT`,
    /// `USERSVC_DATABASE_URL`).
    pub fn load() -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("USERSVC_").split("_"))
            .extract()?;

        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Bypasses the working-directory lookup and loads directly from the
    /// given path. Useful for testing or non-standard deployments.
    pub fn load_from(path: &str) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("USERSVC_").split("_"))
            .extract()?;

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "user-service".to_string(),
                port: default_port(),
                log_level: default_log_level(),
            },
            database: SurrealDbConfig::default(),
        }
    }
}

impl Default for SurrealDbConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            namespace: default_namespace(),
            database: default_database(),
            username: None,
            password: None,
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.name, "user-service");
        assert_eq!(config.service.port, 3000);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.database.url, "ws://127.0.0.1:8000");
        assert_eq!(config.database.namespace, "app");
        assert_eq!(config.database.database, "users");
        assert!(config.database.username.is_none());
        assert_eq!(config.database.max_retries, 5);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
            [service]
            name = "user-service"
            port = 9999

            [database]
            url = "mem://"
            "#
        )
        .unwrap();

        let config = Config::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.service.port, 9999);
        assert_eq!(config.database.url, "mem://");
        // Values absent from the file keep their defaults
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.database.namespace, "app");
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = Config::load_from("/nonexistent/config.toml").unwrap();
        assert_eq!(config.service.port, 3000);
    }
}
