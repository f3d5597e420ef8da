//! Configuration management for the search client

use serde::{Deserialize, Serialize};
use std::path::Path;
use secrecy::{Secret, ExposeSecret};

pub mod loader;
pub mod validation;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolrConfig {
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub transport: TransportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which service and collection to query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Service endpoint, e.g. `http://localhost:8983/solr`
    pub url: String,

    /// Collection (core) name
    pub collection: String,
}

/// Configuration for the HTTP transport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Idle connections kept per host
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle_per_host: usize,

    /// Basic auth user name
    #[serde(default)]
    pub username: Option<String>,

    /// Basic auth password (secured)
    #[serde(default, serialize_with = "serialize_optional_secret", deserialize_with = "deserialize_optional_secret")]
    pub password: Option<Secret<String>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            pool_max_idle_per_host: default_pool_max_idle(),
            username: None,
            password: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_url() -> String { "http://localhost:8983/solr".to_string() }
fn default_collection() -> String { "collection1".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_pool_max_idle() -> usize { 10 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl SolrConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        loader::load_config(path)
    }

    /// Load configuration with environment variable overrides
    pub fn from_file_with_env<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        loader::load_config_with_env(path)
    }

    /// Validate this configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        validation::validate_config(self)
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Self {
            connection: ConnectionConfig {
                url: default_url(),
                collection: default_collection(),
            },
            transport: TransportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Custom serializer for Option<Secret<String>>
fn serialize_optional_secret<S>(secret: &Option<Secret<String>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}

/// Custom deserializer for Option<Secret<String>>
fn deserialize_optional_secret<'de, D>(deserializer: D) -> Result<Option<Secret<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.map(Secret::new))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SolrConfig::default_config();
        assert_eq!(config.connection.url, "http://localhost:8983/solr");
        assert_eq!(config.connection.collection, "collection1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_password_round_trips_through_serde() {
        let mut config = SolrConfig::default_config();
        config.transport.username = Some("reader".to_string());
        config.transport.password = Some(Secret::new("s3cret".to_string()));

        let json = serde_json::to_string(&config).unwrap();
        let back: SolrConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.transport.username.as_deref(), Some("reader"));
        assert_eq!(
            back.transport.password.as_ref().map(|p| p.expose_secret().as_str()),
            Some("s3cret")
        );
    }
}
