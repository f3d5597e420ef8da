//! Configuration loader with environment variable support

use super::SolrConfig;
use super::validation::validate_config;
use crate::error::Result;
use config::{Environment, File};
use std::path::Path;

/// Prefix of environment overrides, e.g. `SOLR_QUERY__CONNECTION__URL`
pub const ENV_PREFIX: &str = "SOLR_QUERY";

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SolrConfig> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .build()?;

    let cfg: SolrConfig = config.try_deserialize()?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Load configuration from a TOML file with environment variable overrides
pub fn load_config_with_env<P: AsRef<Path>>(path: P) -> Result<SolrConfig> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
        )
        .build()?;

    let cfg: SolrConfig = config.try_deserialize()?;
    validate_config(&cfg)?;
    Ok(cfg)
}
