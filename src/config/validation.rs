//! Configuration validation

use super::*;
use crate::error::{SolrError, Result};

/// Validate complete configuration
pub fn validate_config(config: &SolrConfig) -> Result<()> {
    validate_connection_config(&config.connection)?;
    validate_transport_config(&config.transport)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate connection configuration
fn validate_connection_config(config: &ConnectionConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(SolrError::Config(
            "Search service URL cannot be empty".to_string()
        ));
    }

    if !config.url.starts_with("http://") && !config.url.starts_with("https://") {
        return Err(SolrError::Config(
            "Search service URL must start with http:// or https://".to_string()
        ));
    }

    if config.collection.trim().is_empty() {
        return Err(SolrError::Config(
            "Collection name cannot be empty".to_string()
        ));
    }

    Ok(())
}

/// Validate transport configuration
fn validate_transport_config(config: &TransportConfig) -> Result<()> {
    if config.timeout_secs == 0 {
        return Err(SolrError::Config(
            "Request timeout must be greater than 0".to_string()
        ));
    }

    if config.timeout_secs > 300 {
        return Err(SolrError::Config(
            "Request timeout too large (max: 300 seconds)".to_string()
        ));
    }

    match (&config.username, &config.password) {
        (Some(user), _) if user.is_empty() => Err(SolrError::Config(
            "Basic auth username cannot be empty".to_string()
        )),
        (Some(_), None) => Err(SolrError::Config(
            "Basic auth username given without a password".to_string()
        )),
        (None, Some(_)) => Err(SolrError::Config(
            "Basic auth password given without a username".to_string()
        )),
        _ => Ok(()),
    }
}

/// Validate logging configuration
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.to_lowercase().as_str()) {
        return Err(SolrError::Config(
            format!("Invalid log level: {} (must be one of: {})", config.level, valid_levels.join(", "))
        ));
    }

    let valid_formats = ["json", "pretty", "compact"];
    if !valid_formats.contains(&config.format.as_str()) {
        return Err(SolrError::Config(
            format!("Invalid log format: {} (must be one of: {})", config.format, valid_formats.join(", "))
        ));
    }

    Ok(())
}
